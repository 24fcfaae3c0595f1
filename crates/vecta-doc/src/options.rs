use std::path::PathBuf;

use resvg::usvg;

/// Parse settings forwarded to `usvg`.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOptions {
    /// Resolution used to convert physical units (`mm`, `in`, `pt`).
    pub dpi: f32,
    /// Size used when the root element has neither `width`/`height` nor a `viewBox`.
    pub default_size: (f32, f32),
    /// Directory relative `href`s resolve against. `None` disables external files.
    pub resources_dir: Option<PathBuf>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self { dpi: 96.0, default_size: (100.0, 100.0), resources_dir: None }
    }
}

impl DocumentOptions {
    pub(crate) fn to_usvg(&self) -> usvg::Options<'static> {
        let mut opt = usvg::Options::default();
        opt.dpi = self.dpi;
        opt.resources_dir = self.resources_dir.clone();
        match usvg::Size::from_wh(self.default_size.0, self.default_size.1) {
            Some(size) => opt.default_size = size,
            None => log::warn!("ignoring invalid default size {:?}", self.default_size),
        }
        opt
    }
}
