//! Geometry value types shared by the capability interface and backends.
//!
//! Conventions:
//! - user space: origin top-left, +X right, +Y down
//! - [`Rect`] is in device pixels and inclusive on both ends
//! - [`Matrix`] composition is always pre-multiplication (local space first)

mod interval;
mod matrix;
mod rect;
mod vec2;

pub use interval::Interval;
pub use matrix::Matrix;
pub use rect::Rect;
pub use vec2::Vec2;
