/// Encoding of the payload passed to `Renderer::create_image_data`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ImageEncoding {
    Png,
    Jpeg,
}

/// Decoded bitmap owned by a backend. Only its dimensions are visible here;
/// decoding and pixel access stay inside the backend adapter.
pub trait ImageData {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
}
