//! Vecta engine crate.
//!
//! This crate owns the backend-agnostic pieces every drawing backend shares:
//! the pixel-exact geometry algebra, the style model and the capability
//! interface a backend adapter implements.

pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod render;
pub mod style;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{GeometryError, RenderError};
