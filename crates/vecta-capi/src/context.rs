use vecta_engine::coords::Rect;

use crate::VectaStatus;

#[cfg(feature = "skia")]
pub use skia::VectaContext;

/// Without a backend no context can exist.
#[cfg(not(feature = "skia"))]
pub enum VectaContext {}

#[cfg(not(feature = "skia"))]
impl VectaContext {
    pub fn new(_svg: &str) -> Result<Self, VectaStatus> {
        Err(VectaStatus::NoRenderer)
    }

    pub fn view_box(&self) -> Option<Rect> {
        match *self {}
    }

    pub fn bounds(&self) -> Result<Rect, VectaStatus> {
        match *self {}
    }

    pub fn scale(&mut self, _sx: f32, _sy: f32) {
        match *self {}
    }

    pub fn translate(&mut self, _tx: f32, _ty: f32) {
        match *self {}
    }

    pub fn reset_transform(&mut self) {
        match *self {}
    }

    pub fn render_bgra(&mut self, _data: &mut [u8], _width: u32, _height: u32, _stride: usize) -> Result<(), VectaStatus> {
        match *self {}
    }
}

#[cfg(feature = "skia")]
mod skia {
    use std::cell::RefCell;
    use std::rc::Rc;

    use vecta_doc::{Document, DocumentOptions};
    use vecta_engine::coords::Matrix;
    use vecta_engine::render::{Renderer, Transform};
    use vecta_skia::tiny_skia::Pixmap;
    use vecta_skia::{SkiaRenderer, SkiaTransform};

    use super::*;

    /// One parsed document with its renderer and user transform.
    pub struct VectaContext {
        document: Document<SkiaRenderer>,
        transform: SkiaTransform,
    }

    impl VectaContext {
        pub fn new(svg: &str) -> Result<Self, VectaStatus> {
            let renderer = Rc::new(RefCell::new(SkiaRenderer::new()));
            let transform = renderer.borrow_mut().create_identity_transform();
            let document = Document::parse(svg, renderer, &DocumentOptions::default()).map_err(|err| {
                log::warn!("vecta_create: {err}");
                VectaStatus::from(err)
            })?;
            Ok(Self { document, transform })
        }

        pub fn view_box(&self) -> Option<Rect> {
            self.document.view_box()
        }

        pub fn bounds(&self) -> Result<Rect, VectaStatus> {
            Ok(self.document.bounds(&self.transform)?)
        }

        pub fn scale(&mut self, sx: f32, sy: f32) {
            self.transform.scale(sx, sy);
        }

        pub fn translate(&mut self, tx: f32, ty: f32) {
            self.transform.translate(tx, ty);
        }

        pub fn reset_transform(&mut self) {
            self.transform.set_matrix(Matrix::IDENTITY);
        }

        /// Draws over premultiplied BGRA pixels, `stride` bytes per row.
        ///
        /// `data` must hold at least `stride * (height - 1) + width * 4` bytes.
        pub fn render_bgra(&mut self, data: &mut [u8], width: u32, height: u32, stride: usize) -> Result<(), VectaStatus> {
            let mut pixmap = Pixmap::new(width, height).ok_or(VectaStatus::InvalidArgument)?;
            let row_bytes = width as usize * 4;

            for (y, dst) in pixmap.data_mut().chunks_exact_mut(row_bytes).enumerate() {
                let src = &data[y * stride..y * stride + row_bytes];
                for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
                    // Color channels above alpha are not valid premultiplied values.
                    let a = s[3];
                    d.copy_from_slice(&[s[2].min(a), s[1].min(a), s[0].min(a), a]);
                }
            }

            let renderer = self.document.renderer();
            renderer.borrow_mut().set_surface(pixmap);
            let rendered = self.document.render_with(&self.transform);
            let pixmap = renderer.borrow_mut().take_surface();
            rendered?;

            let pixmap = pixmap.ok_or(VectaStatus::InvalidArgument)?;
            for (y, src) in pixmap.data().chunks_exact(row_bytes).enumerate() {
                let dst = &mut data[y * stride..y * stride + row_bytes];
                for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
                    d.copy_from_slice(&[s[2], s[1], s[0], s[3]]);
                }
            }
            Ok(())
        }
    }
}
