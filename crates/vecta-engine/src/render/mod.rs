//! Capability interface implemented by drawing backends.
//!
//! A backend adapter provides one [`Renderer`] plus its [`Path`],
//! [`Transform`] and [`ImageData`] types. Everything a document interpreter
//! needs goes through these traits; backend specifics stay behind them.

mod guard;
mod image;
mod path;
mod renderer;
mod stack;
mod transform;

pub use guard::SaveRestoreGuard;
pub use image::{ImageData, ImageEncoding};
pub use path::{Path, PathCommand, PathData};
pub use renderer::Renderer;
pub use stack::StateStack;
pub use transform::Transform;
