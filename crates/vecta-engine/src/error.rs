use thiserror::Error;

/// Invalid input to one of the geometry value types.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("rect extent must be a non-negative number, got {width}x{height}")]
    InvalidExtent { width: f32, height: f32 },
}

/// Failure reported by a backend factory.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Encoded image payload could not be turned into a bitmap.
    #[error("failed to decode image data")]
    ImageDecode(#[source] anyhow::Error),
}
