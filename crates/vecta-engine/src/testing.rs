//! Recording test double for the capability interface.
//!
//! `RecordingRenderer` draws nothing. It logs every call into a shared
//! [`CallLog`] (which outlives the renderer, so tests can inspect what a
//! dropped renderer received) and answers `path_bounds` from path control
//! points so interpreters can be tested without a rasterizer.

use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::{Matrix, Rect};
use crate::error::RenderError;
use crate::render::{ImageData, ImageEncoding, PathData, Renderer, StateStack, Transform};
use crate::style::{FillStyle, GraphicStyle, StrokeStyle};

/// One observed renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateImageData(ImageEncoding),
    CreatePath,
    CreateTransform(Matrix),
    Save,
    Restore,
    Reset,
    DrawPath { has_fill: bool, has_stroke: bool },
    DrawImage { clip_area: Rect, fill_area: Rect },
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RecordedImage {
    pub width: f32,
    pub height: f32,
}

impl ImageData for RecordedImage {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }
}

#[derive(Debug)]
pub struct RecordingRenderer {
    log: CallLog,
    transforms: StateStack<Matrix>,
    max_depth: usize,
    image_size: (f32, f32),
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            log: CallLog::default(),
            transforms: StateStack::new(Matrix::IDENTITY),
            max_depth: 0,
            image_size: (1.0, 1.0),
        }
    }

    /// Size reported by every image this renderer "decodes".
    pub fn with_image_size(mut self, width: f32, height: f32) -> Self {
        self.image_size = (width, height);
        self
    }

    /// Shared handle to the call log; stays valid after the renderer is dropped.
    pub fn call_log(&self) -> CallLog {
        Rc::clone(&self.log)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.log.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn depth(&self) -> usize {
        self.transforms.depth()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }

    fn effective(&self, graphic_style: &GraphicStyle<Self>) -> Matrix {
        let current = *self.transforms.current();
        match &graphic_style.transform {
            Some(t) => current.pre_concat(&t.matrix()),
            None => current,
        }
    }
}

impl Renderer for RecordingRenderer {
    type Path = PathData;
    type Transform = Matrix;
    type ImageData = RecordedImage;

    fn create_image_data(
        &mut self,
        base64: &str,
        encoding: ImageEncoding,
    ) -> Result<RecordedImage, RenderError> {
        self.record(Call::CreateImageData(encoding));
        if base64.trim().is_empty() {
            return Err(RenderError::ImageDecode(anyhow::anyhow!("empty image payload")));
        }
        let (width, height) = self.image_size;
        Ok(RecordedImage { width, height })
    }

    fn create_path(&mut self) -> PathData {
        self.record(Call::CreatePath);
        PathData::new()
    }

    fn create_transform(&mut self, matrix: Matrix) -> Matrix {
        self.record(Call::CreateTransform(matrix));
        matrix
    }

    fn save(&mut self, graphic_style: &GraphicStyle<Self>) {
        self.record(Call::Save);
        let next = self.effective(graphic_style);
        self.transforms.push(next);
        self.max_depth = self.max_depth.max(self.transforms.depth());
    }

    fn restore(&mut self) {
        self.record(Call::Restore);
        self.transforms.pop();
    }

    fn reset(&mut self) {
        self.record(Call::Reset);
        self.transforms.reset(Matrix::IDENTITY);
    }

    fn draw_path(
        &mut self,
        _path: &PathData,
        _graphic_style: &GraphicStyle<Self>,
        fill_style: &FillStyle<Self>,
        stroke_style: &StrokeStyle<Self>,
    ) {
        self.record(Call::DrawPath {
            has_fill: fill_style.has_fill,
            has_stroke: stroke_style.has_stroke,
        });
    }

    fn draw_image(
        &mut self,
        _image: &RecordedImage,
        _graphic_style: &GraphicStyle<Self>,
        clip_area: Rect,
        fill_area: Rect,
    ) {
        self.record(Call::DrawImage { clip_area, fill_area });
    }

    fn path_bounds(
        &self,
        path: &PathData,
        graphic_style: &GraphicStyle<Self>,
        fill_style: &FillStyle<Self>,
        stroke_style: &StrokeStyle<Self>,
    ) -> Rect {
        if !fill_style.has_fill && !stroke_style.has_stroke {
            return Rect::empty();
        }
        let Some((lo, hi)) = path.control_box(&self.effective(graphic_style)) else {
            return Rect::empty();
        };
        let grow = if stroke_style.has_stroke { stroke_style.line_width / 2.0 } else { 0.0 };
        Rect::enclosing(lo.x - grow, lo.y - grow, hi.x + grow, hi.y + grow, 1e-3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Path;

    #[test]
    fn path_bounds_of_rect_with_default_fill() {
        let mut renderer = RecordingRenderer::new();
        let mut path = renderer.create_path();
        path.rect(10.0, 10.0, 100.0, 100.0);

        let bounds = renderer.path_bounds(
            &path,
            &GraphicStyle::default(),
            &FillStyle::default(),
            &StrokeStyle::default(),
        );
        assert_eq!(bounds, Rect::new(10.0, 10.0, 100.0, 100.0).unwrap());
    }

    #[test]
    fn unbalanced_restore_is_ignored() {
        let mut renderer = RecordingRenderer::new();
        renderer.restore();
        assert_eq!(renderer.depth(), 0);
        renderer.save(&GraphicStyle::default());
        assert_eq!(renderer.depth(), 1);
    }

    #[test]
    fn save_composes_style_transform() {
        let mut renderer = RecordingRenderer::new();
        let t = renderer.create_transform(Matrix::from_scale(2.0, 2.0));
        renderer.save(&GraphicStyle::with_transform(t));

        let mut path = renderer.create_path();
        path.rect(1.0, 1.0, 4.0, 4.0);
        let bounds = renderer.path_bounds(
            &path,
            &GraphicStyle::default(),
            &FillStyle::default(),
            &StrokeStyle::default(),
        );
        assert_eq!(bounds, Rect::new(2.0, 2.0, 8.0, 8.0).unwrap());
    }

    #[test]
    fn empty_payload_fails_to_decode() {
        let mut renderer = RecordingRenderer::new();
        assert!(renderer.create_image_data("  ", ImageEncoding::Png).is_err());
        assert!(renderer.create_image_data("aGk=", ImageEncoding::Jpeg).is_ok());
    }
}
