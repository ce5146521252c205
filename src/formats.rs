//! Content sniffing
//!
//! Inspects the leading bytes of a file to infer its real format, independent
//! of the filename extension. Used to skip files whose extension claims JPEG
//! while the content says otherwise.

use crate::constants::{JPEG_MIME, OCTET_STREAM_MIME};
use image::ImageFormat;

/// Returns the MIME type implied by the magic bytes of `data`.
///
/// Unrecognised or empty input maps to `application/octet-stream`.
pub fn sniff_content_type(data: &[u8]) -> &'static str {
    match image::guess_format(data) {
        Ok(format) => mime_type(format),
        Err(_) => OCTET_STREAM_MIME,
    }
}

fn mime_type(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => JPEG_MIME,
        ImageFormat::Png => "image/png",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::Tiff => "image/tiff",
        ImageFormat::Avif => "image/avif",
        ImageFormat::Ico => "image/x-icon",
        _ => OCTET_STREAM_MIME,
    }
}
