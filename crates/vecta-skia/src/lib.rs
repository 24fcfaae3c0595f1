//! tiny-skia backend for the Vecta capability interface.
//!
//! [`SkiaRenderer`] rasterizes into a premultiplied RGBA [`tiny_skia::Pixmap`]
//! installed with [`SkiaRenderer::set_surface`]. It also answers
//! `path_bounds`, so interpreters can size output before any surface exists.

mod bitmap;
mod config;
mod paint;
mod path;
mod renderer;
mod transform;

pub use config::SkiaConfig;
pub use bitmap::SkiaImageData;
pub use path::SkiaPath;
pub use renderer::SkiaRenderer;
pub use transform::SkiaTransform;

pub use tiny_skia;
