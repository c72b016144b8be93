//! Raster decoding into RGBA8 buffers.

use std::io::Cursor;
use std::path::Path;

use image::{ImageReader, RgbaImage};

use super::DecodeError;

/// Decode an image from bytes into an RGBA8 buffer.
///
/// The format is sniffed from the content, so any format enabled on the
/// `image` dependency is accepted. RGB sources gain an opaque alpha channel
/// and single-channel sources are expanded to gray.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized.
/// Returns `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_icon(bytes: &[u8]) -> Result<RgbaImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(img.into_rgba8())
}

/// Read and decode an image file.
///
/// # Errors
///
/// Returns `DecodeError::IoError` if the file is missing or unreadable,
/// otherwise the same errors as [`decode_icon`].
pub fn decode_icon_file(path: &Path) -> Result<RgbaImage, DecodeError> {
    let bytes = std::fs::read(path)
        .map_err(|e| DecodeError::IoError(format!("{}: {}", path.display(), e)))?;
    decode_icon(&bytes)
}
