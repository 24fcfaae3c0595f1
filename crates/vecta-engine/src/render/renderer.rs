use crate::coords::{Matrix, Rect};
use crate::error::RenderError;
use crate::style::{FillStyle, GraphicStyle, StrokeStyle};

use super::{ImageData, ImageEncoding, Path, Transform};

/// Capability interface between a document interpreter and one drawing backend.
///
/// Primitives returned by the factories are bound to the renderer instance
/// that created them and must not be handed to another instance.
///
/// # State stack
///
/// [`save`](Self::save) opens a compositing / clip / transform scope and must
/// be paired with exactly one [`restore`](Self::restore). Balancing the calls
/// is the caller's job; backends ignore (and log) a `restore` at top level.
/// Draw operations are valid at any depth.
///
/// # Drawing
///
/// Draw operations are immediate mode: their effect is on the backend's
/// surface when the call returns, without any commit step.
pub trait Renderer: Sized {
    type Path: Path;
    type Transform: Transform;
    type ImageData: ImageData;

    /// Decodes a base64 payload of the given encoding into a bitmap.
    fn create_image_data(
        &mut self,
        base64: &str,
        encoding: ImageEncoding,
    ) -> Result<Self::ImageData, RenderError>;

    fn create_path(&mut self) -> Self::Path;

    fn create_transform(&mut self, matrix: Matrix) -> Self::Transform;

    fn create_identity_transform(&mut self) -> Self::Transform {
        self.create_transform(Matrix::IDENTITY)
    }

    fn save(&mut self, graphic_style: &GraphicStyle<Self>);

    fn restore(&mut self);

    /// Lets a backend discard accumulated state between documents.
    fn reset(&mut self) {}

    fn draw_path(
        &mut self,
        path: &Self::Path,
        graphic_style: &GraphicStyle<Self>,
        fill_style: &FillStyle<Self>,
        stroke_style: &StrokeStyle<Self>,
    );

    /// Draws `image` scaled into `fill_area`, clipped to `clip_area`.
    fn draw_image(
        &mut self,
        image: &Self::ImageData,
        graphic_style: &GraphicStyle<Self>,
        clip_area: Rect,
        fill_area: Rect,
    );

    /// Tight pixel bounds of what [`draw_path`](Self::draw_path) would paint
    /// with the same arguments at the current state.
    ///
    /// Backends that cannot compute bounds keep this default, which returns
    /// the empty rect. Callers must read an empty result as "unsupported",
    /// not as zero-size geometry.
    fn path_bounds(
        &self,
        _path: &Self::Path,
        _graphic_style: &GraphicStyle<Self>,
        _fill_style: &FillStyle<Self>,
        _stroke_style: &StrokeStyle<Self>,
    ) -> Rect {
        Rect::empty()
    }
}
