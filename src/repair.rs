//! Best-effort repair of captured image output.
//!
//! Some wkhtmltoimage builds write warnings ahead of the image stream on
//! combined output. Rather than separating the streams, the repair loop
//! drops leading bytes one at a time until the remainder decodes, then
//! re-encodes a clean image.

use std::io::Cursor;

use crate::OutputFormat;

/// Strips leading noise from `raw` for the png/jpg formats.
///
/// The loop is bounded by the buffer length and never fails: when no suffix
/// of the buffer decodes, the exhausted (empty) remainder is returned as-is.
/// Other formats pass through untouched.
pub fn cleanup_output(raw: Vec<u8>, format: OutputFormat) -> Vec<u8> {
    let raster = match format {
        OutputFormat::Png => image::ImageFormat::Png,
        OutputFormat::Jpg => image::ImageFormat::Jpeg,
        OutputFormat::Svg | OutputFormat::Bmp => return raw,
    };

    let mut img: &[u8] = &raw;
    loop {
        match image::load_from_memory_with_format(img, raster) {
            Ok(decoded) => {
                // Lossless for png; the encoder's default quality for jpg.
                let mut clean = Cursor::new(Vec::with_capacity(img.len()));
                return match decoded.write_to(&mut clean, raster) {
                    Ok(()) => clean.into_inner(),
                    Err(e) => {
                        log::warn!("failed to re-encode repaired image: {}", e);
                        img.to_vec()
                    }
                };
            }
            Err(_) => {
                if img.is_empty() {
                    return Vec::new();
                }
                img = &img[1..];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbaImage};

    fn sample_png() -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(8, 8, |x, y| {
            image::Rgba([x as u8 * 16, y as u8 * 16, 128, 255])
        }));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_clean_png_survives() {
        let png = sample_png();
        let repaired = cleanup_output(png, OutputFormat::Png);
        assert_eq!(&repaired[0..8], b"\x89PNG\r\n\x1a\n");
        image::load_from_memory_with_format(&repaired, image::ImageFormat::Png).unwrap();
    }

    #[test]
    fn test_leading_noise_is_stripped() {
        let png = sample_png();
        let baseline = cleanup_output(png.clone(), OutputFormat::Png);

        for garbage_len in [1usize, 7, 64] {
            let mut noisy = vec![b'W'; garbage_len];
            noisy.extend_from_slice(&png);
            let repaired = cleanup_output(noisy, OutputFormat::Png);
            // Output length does not depend on how much noise preceded the image.
            assert_eq!(repaired.len(), baseline.len());
            image::load_from_memory_with_format(&repaired, image::ImageFormat::Png).unwrap();
        }
    }

    #[test]
    fn test_hopeless_buffer_exhausts_to_empty() {
        let garbage = b"Loading page (1/2)\nError: network failure\n".to_vec();
        let repaired = cleanup_output(garbage, OutputFormat::Png);
        assert!(repaired.is_empty());
    }

    #[test]
    fn test_other_formats_pass_through() {
        let svg = b"<svg xmlns='http://www.w3.org/2000/svg'/>".to_vec();
        assert_eq!(cleanup_output(svg.clone(), OutputFormat::Svg), svg);

        let bmp = vec![0u8, 1, 2, 3];
        assert_eq!(cleanup_output(bmp.clone(), OutputFormat::Bmp), bmp);
    }
}
