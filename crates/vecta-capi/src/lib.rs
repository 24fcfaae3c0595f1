//! C entry points.
//!
//! A `vecta_t` context owns one parsed document, the renderer it draws with
//! and a user transform applied to every measurement and render. See
//! `include/vecta.h` for the C declarations.

mod context;
mod ffi;
mod types;

pub use context::VectaContext;
pub use ffi::*;
pub use types::{VectaRect, VectaStatus};
