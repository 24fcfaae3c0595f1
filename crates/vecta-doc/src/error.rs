use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid SVG document")]
    Parse(#[from] resvg::usvg::Error),

    #[error("invalid SVG markup")]
    Markup(#[from] roxmltree::Error),

    /// The renderer was mutably borrowed by the caller while the document
    /// tried to use it.
    #[error("renderer is already in use")]
    RendererBusy,
}
