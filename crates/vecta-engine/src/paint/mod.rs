//! Paint model: colors, gradients and the color-or-gradient [`Paint`] sum.

mod color;
mod gradient;
mod paint;

pub use color::Color;
pub use gradient::{ColorStop, Gradient, GradientKind, SpreadMethod};
pub use paint::Paint;
