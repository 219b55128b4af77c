//! Decode and encode with source-format pass-through.

use std::io::Cursor;

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};

/// A decoded image together with its source format and pixel dimensions.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl DecodedImage {
    /// MIME type of the source format, e.g. `image/png`.
    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }
}

/// Decode raw bytes into pixel data, detecting the format from the content.
pub fn decode(data: &[u8]) -> Result<DecodedImage, anyhow::Error> {
    let cursor = Cursor::new(data);
    let reader = ImageReader::new(cursor).with_guessed_format()?;
    let format = reader
        .format()
        .ok_or_else(|| anyhow::anyhow!("Unrecognized image format"))?;
    let image = reader.decode()?;
    let (width, height) = image.dimensions();

    Ok(DecodedImage {
        image,
        format,
        width,
        height,
    })
}

/// Encode pixel data back into the given format. JPEG has no alpha channel,
/// so RGBA data is flattened to RGB first.
pub fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, anyhow::Error> {
    let mut buffer = Cursor::new(Vec::new());
    match format {
        ImageFormat::Jpeg => {
            DynamicImage::ImageRgb8(image.to_rgb8()).write_to(&mut buffer, format)?
        }
        _ => image.write_to(&mut buffer, format)?,
    }
    Ok(buffer.into_inner())
}
