//! Decoding of compressed (PNG) images
//!
//! Decompression itself is handled by the [image] crate; this module only
//!   normalizes its output to a three channel [PixelBuffer].
//!
//! [image]: https://docs.rs/image
//! [PixelBuffer]: ../buffer/struct.PixelBuffer.html

use crate::buffer::PixelBuffer;
use crate::color::Rgb8;
use crate::error::{ImageError, Result};

use image::DynamicImage;

/// Decode a PNG file held in memory
///
/// RGB data is copied verbatim; for RGBA data the alpha channel is dropped.
///   Other layouts (gray, 16 bit) are converted to 8 bit RGB first.
///   Set `flip_y` to flip the result vertically.
pub fn decode_png(data: &[u8], flip_y: bool) -> Result<PixelBuffer> {
    if data.is_empty() {
        return Err(ImageError::DecodeFailure("empty input".to_string()));
    }
    let img = image::load_from_memory_with_format(data, image::ImageFormat::Png)?;
    let (w, h) = (img.width() as usize, img.height() as usize);
    log::debug!("png: {}x{} {:?}", w, h, img.color());

    let pixels : Vec<Rgb8> = match img {
        DynamicImage::ImageRgb8(rgb) => rgb.into_raw()
            .chunks_exact(3)
            .map(|p| Rgb8::new(p[0], p[1], p[2]))
            .collect(),
        DynamicImage::ImageRgba8(rgba) => rgba.into_raw()
            .chunks_exact(4)
            .map(|p| Rgb8::new(p[0], p[1], p[2]))
            .collect(),
        other => other.to_rgb8().into_raw()
            .chunks_exact(3)
            .map(|p| Rgb8::new(p[0], p[1], p[2]))
            .collect(),
    };
    let mut buf = PixelBuffer::from_pixels(w, h, pixels);
    if flip_y {
        buf.flip_vertical();
    }
    Ok(buf)
}
