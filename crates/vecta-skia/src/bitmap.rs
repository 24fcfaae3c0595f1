use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tiny_skia::{IntSize, Pixmap};
use vecta_engine::render::{ImageData, ImageEncoding};

/// Decoded bitmap in premultiplied RGBA, ready to be drawn by
/// [`SkiaRenderer`](crate::SkiaRenderer).
#[derive(Debug, Clone, PartialEq)]
pub struct SkiaImageData {
    pixmap: Pixmap,
}

impl SkiaImageData {
    /// Decodes base64 text (an optional `data:` URI prefix and embedded
    /// whitespace are tolerated).
    pub fn decode(payload: &str, encoding: ImageEncoding) -> anyhow::Result<Self> {
        let text = payload.split_once(";base64,").map_or(payload, |(_, data)| data);
        let text: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let bytes = STANDARD.decode(text.as_bytes()).context("payload is not valid base64")?;

        let format = match encoding {
            ImageEncoding::Png => ::image::ImageFormat::Png,
            ImageEncoding::Jpeg => ::image::ImageFormat::Jpeg,
        };
        let rgba = ::image::load_from_memory_with_format(&bytes, format)
            .with_context(|| format!("payload is not a valid {encoding:?} image"))?
            .into_rgba8();

        let (width, height) = rgba.dimensions();
        let size = IntSize::from_wh(width, height).context("image has a zero dimension")?;
        let mut data = rgba.into_raw();
        premultiply(&mut data);

        let pixmap = Pixmap::from_vec(data, size).context("pixel buffer does not match size")?;
        log::debug!("decoded {encoding:?} image {width}x{height}");
        Ok(Self { pixmap })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

impl ImageData for SkiaImageData {
    fn width(&self) -> f32 {
        self.pixmap.width() as f32
    }

    fn height(&self) -> f32 {
        self.pixmap.height() as f32
    }
}

/// Straight RGBA8 to premultiplied RGBA8, in place.
fn premultiply(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = px[3] as u16;
        for c in &mut px[..3] {
            *c = ((*c as u16 * a + 127) / 255) as u8;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A 2x1 PNG: one opaque red pixel, one half-transparent white pixel.
    pub(crate) fn two_pixel_png() -> String {
        let mut img = ::image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, ::image::Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, ::image::Rgba([255, 255, 255, 128]));

        let mut png = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut png), ::image::ImageFormat::Png).unwrap();
        STANDARD.encode(png)
    }

    #[test]
    fn decodes_and_premultiplies() {
        let image = SkiaImageData::decode(&two_pixel_png(), ImageEncoding::Png).unwrap();
        assert_eq!((image.width(), image.height()), (2.0, 1.0));

        let px = image.pixmap().pixel(1, 0).unwrap();
        assert_eq!((px.red(), px.green(), px.blue(), px.alpha()), (128, 128, 128, 128));
        let px = image.pixmap().pixel(0, 0).unwrap();
        assert_eq!((px.red(), px.alpha()), (255, 255));
    }

    #[test]
    fn accepts_data_uri_and_line_breaks() {
        let b64 = two_pixel_png();
        let wrapped = format!("data:image/png;base64,{}\n{}", &b64[..10], &b64[10..]);
        assert!(SkiaImageData::decode(&wrapped, ImageEncoding::Png).is_ok());
    }

    #[test]
    fn rejects_garbage_and_wrong_encoding() {
        assert!(SkiaImageData::decode("not base64!", ImageEncoding::Png).is_err());
        assert!(SkiaImageData::decode(&two_pixel_png(), ImageEncoding::Jpeg).is_err());
    }
}
