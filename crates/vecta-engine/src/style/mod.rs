//! Style model: fill, stroke, clip and compositing state handed to a renderer.
//!
//! Styles that carry primitives (transforms, clip paths, gradient transforms)
//! are generic over the renderer that created them.

mod clip;
mod fill;
mod graphic;
mod stroke;

pub use clip::ClippingPath;
pub use fill::{FillStyle, WindingRule};
pub use graphic::GraphicStyle;
pub use stroke::{LineCap, LineJoin, StrokeStyle};
