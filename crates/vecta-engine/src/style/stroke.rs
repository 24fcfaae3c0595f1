use crate::paint::Paint;
use crate::render::Renderer;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Stroke parameters of a drawn path. Off by default.
#[derive(Debug)]
pub struct StrokeStyle<R: Renderer> {
    pub has_stroke: bool,
    pub opacity: f32,
    pub line_width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub miter_limit: f32,
    pub dash_array: Vec<f32>,
    pub dash_offset: f32,
    pub paint: Paint<R>,
}

impl<R: Renderer> Default for StrokeStyle<R> {
    fn default() -> Self {
        Self {
            has_stroke: false,
            opacity: 1.0,
            line_width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            miter_limit: 4.0,
            dash_array: Vec::new(),
            dash_offset: 0.0,
            paint: Paint::default(),
        }
    }
}

impl<R: Renderer> StrokeStyle<R> {
    /// An enabled stroke of `line_width` painted with `paint`.
    pub fn new(paint: impl Into<Paint<R>>, line_width: f32) -> Self {
        Self {
            has_stroke: true,
            line_width,
            paint: paint.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_dashed(&self) -> bool {
        !self.dash_array.is_empty()
    }
}
