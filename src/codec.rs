use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};

/// JPEG re-encode quality on the 0-100 scale.
pub const JPEG_QUALITY: u8 = 95;

/// Startup capability probe: PNG and JPEG support must be compiled into the
/// image backend before any scanning starts.
pub fn probe() -> crate::Result<()> {
    for format in [ImageFormat::Png, ImageFormat::Jpeg] {
        if !format.reading_enabled() || !format.writing_enabled() {
            return Err(anyhow::anyhow!(
                "image codec support for {format:?} is not available"
            ));
        }
    }
    Ok(())
}

/// Open a file with format sniffing and decode it, returning the image
/// together with the detected container format.
pub fn decode<P: AsRef<Path>>(path: P) -> crate::Result<(DynamicImage, ImageFormat)> {
    let reader = ImageReader::open(&path)?.with_guessed_format()?;
    let format = reader
        .format()
        .ok_or_else(|| anyhow::anyhow!("unrecognized image format"))?;
    let img = reader.decode()?;
    Ok((img, format))
}

/// Re-encode a padded canvas over the original file.
///
/// JPEG cannot carry alpha: the canvas is flattened to RGB (formerly
/// transparent pixels render black) and written at quality 95, keeping the
/// original extension. Everything else is saved as PNG with alpha intact.
pub fn encode<P: AsRef<Path>>(canvas: &RgbaImage, format: ImageFormat, path: P) -> crate::Result<()> {
    let path = path.as_ref();
    match format {
        ImageFormat::Jpeg => {
            let flattened = DynamicImage::ImageRgba8(canvas.clone()).to_rgb8();
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY);
            encoder.encode_image(&flattened)?;
        }
        _ => {
            canvas.save_with_format(path, ImageFormat::Png)?;
        }
    }
    Ok(())
}
