//! Source image loading: decoding, validation, and error types.
//!
//! The browser performs the actual file read or URL fetch; this module owns
//! everything deterministic about a load: validating the content type and
//! HTTP status, decoding the bytes into an RGB pixel buffer, and the error
//! vocabulary surfaced to the user. Every error is terminal for the current
//! load attempt; the user re-tries manually.

use thiserror::Error;

/// Error types for image loading.
///
/// All variants are rendered into a single user-visible message slot.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A picked file does not have an image content type.
    #[error("Please select an image file")]
    InvalidFileType,

    /// The URL input could not be parsed as a URL.
    #[error("Invalid image URL")]
    InvalidUrl,

    /// The fetch settled with a non-2xx status.
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),

    /// The URL resolved, but not to an image content type.
    #[error("The URL does not point to an image file")]
    NonImageContent,

    /// The bytes could not be decoded as an image.
    #[error("Failed to decode image data: {0}")]
    Decode(String),

    /// The fetch itself failed (network error, CORS rejection, ...).
    #[error("Failed to load image from URL: {0}")]
    Network(String),
}

/// An immutable source-image pixel buffer.
///
/// RGB, 3 bytes per pixel, row-major. Replaced wholesale on each new load;
/// never partially mutated.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
    /// RGB pixel data. Length is width * height * 3.
    pub pixels: Vec<u8>,
}

impl SourceImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width * height * 3) as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

/// Decode image bytes into a [`SourceImage`].
///
/// Accepts any format the `image` crate is built with (JPEG and PNG here)
/// and converts to RGB8.
pub fn decode_image(bytes: &[u8]) -> Result<SourceImage, LoadError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| LoadError::Decode(e.to_string()))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(SourceImage::new(width, height, rgb.into_raw()))
}

fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

/// Pre-validate the URL input before a fetch is attempted.
///
/// Full URL resolution stays in the browser; this rejects empty input and
/// strings without a scheme so the fetch is never started for them.
pub fn check_url(url: &str) -> Result<(), LoadError> {
    let trimmed = url.trim();
    if trimmed.is_empty() || !trimmed.contains("://") {
        return Err(LoadError::InvalidUrl);
    }
    Ok(())
}

/// Validate the content type of a locally picked file.
pub fn check_file_type(content_type: &str) -> Result<(), LoadError> {
    if is_image_content_type(content_type) {
        Ok(())
    } else {
        Err(LoadError::InvalidFileType)
    }
}

/// Validate an HTTP response before its body is decoded.
///
/// Non-2xx statuses abort the load; a 2xx response must still carry an
/// image content type.
pub fn check_response(status: u16, content_type: &str) -> Result<(), LoadError> {
    if !(200..300).contains(&status) {
        return Err(LoadError::HttpStatus(status));
    }
    if !is_image_content_type(content_type) {
        return Err(LoadError::NonImageContent);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode a small test image to PNG bytes.
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_png() {
        let img = decode_image(&png_bytes(12, 8)).unwrap();
        assert_eq!(img.width, 12);
        assert_eq!(img.height, 8);
        assert_eq!(img.pixels.len(), 12 * 8 * 3);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_image(&[0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn test_decode_empty_fails() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_check_file_type() {
        assert!(check_file_type("image/png").is_ok());
        assert!(check_file_type("image/jpeg").is_ok());
        assert!(matches!(
            check_file_type("text/html"),
            Err(LoadError::InvalidFileType)
        ));
        assert!(matches!(
            check_file_type(""),
            Err(LoadError::InvalidFileType)
        ));
    }

    #[test]
    fn test_check_url() {
        assert!(check_url("https://example.com/a.png").is_ok());
        assert!(matches!(check_url(""), Err(LoadError::InvalidUrl)));
        assert!(matches!(check_url("   "), Err(LoadError::InvalidUrl)));
        assert!(matches!(
            check_url("not a url"),
            Err(LoadError::InvalidUrl)
        ));
    }

    #[test]
    fn test_check_response_status() {
        assert!(check_response(200, "image/png").is_ok());
        assert!(check_response(204, "image/png").is_ok());
        assert!(matches!(
            check_response(404, "image/png"),
            Err(LoadError::HttpStatus(404))
        ));
        assert!(matches!(
            check_response(500, "image/png"),
            Err(LoadError::HttpStatus(500))
        ));
        // Redirects are settled by the fetch layer; a 3xx reaching us is an error
        assert!(check_response(301, "image/png").is_err());
    }

    #[test]
    fn test_check_response_content_type() {
        assert!(matches!(
            check_response(200, "text/html"),
            Err(LoadError::NonImageContent)
        ));
    }

    #[test]
    fn test_status_checked_before_content_type() {
        assert!(matches!(
            check_response(404, "text/html"),
            Err(LoadError::HttpStatus(404))
        ));
    }

    #[test]
    fn test_load_error_display() {
        assert_eq!(
            LoadError::InvalidFileType.to_string(),
            "Please select an image file"
        );
        assert_eq!(
            LoadError::HttpStatus(404).to_string(),
            "HTTP error: status 404"
        );
        assert_eq!(
            LoadError::Network("timed out".to_string()).to_string(),
            "Failed to load image from URL: timed out"
        );
    }

    #[test]
    fn test_source_image_empty() {
        let img = SourceImage::new(0, 0, vec![]);
        assert!(img.is_empty());
    }
}
