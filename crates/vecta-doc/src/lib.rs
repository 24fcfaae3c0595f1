//! SVG document interpreter for the Vecta capability interface.
//!
//! A [`Document`] is parsed once with `usvg` and can then be rendered or
//! measured any number of times against the renderer it was created with.
//! Everything the interpreter draws goes through [`vecta_engine::render::Renderer`],
//! so the same document renders identically on every backend.

mod convert;
mod document;
mod error;
mod options;
mod walk;

pub use document::Document;
pub use error::DocumentError;
pub use options::DocumentOptions;
