use vecta_doc::DocumentError;
use vecta_engine::coords::Rect;

/// Result of every fallible entry point.
#[repr(C)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VectaStatus {
    Ok = 0,
    /// The library was built without a rendering backend.
    NoRenderer = 1,
    InvalidDocument = 2,
    /// Null pointer, or a pixel buffer whose geometry does not add up.
    InvalidArgument = 3,
}

impl From<DocumentError> for VectaStatus {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Parse(_) | DocumentError::Markup(_) => VectaStatus::InvalidDocument,
            DocumentError::RendererBusy => VectaStatus::InvalidArgument,
        }
    }
}

/// Pixel rect in two-corner inclusive form: `x1 = x0 + width - 1`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct VectaRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl From<Rect> for VectaRect {
    fn from(rect: Rect) -> Self {
        let (x0, y0, x1, y1) = rect.corners();
        Self { x0: x0.into(), y0: y0.into(), x1: x1.into(), y1: y1.into() }
    }
}
