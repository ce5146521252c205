pub const DEFAULT_QUALITY: u8 = 60;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Marker inserted before the extension of sibling outputs. Any path that
/// already contains it is treated as an output and never reprocessed.
pub const MIN_MARKER: &str = "_min";

/// Case-sensitive: `photo.JPG` is not a candidate.
pub const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

pub const JPEG_MIME: &str = "image/jpeg";
pub const OCTET_STREAM_MIME: &str = "application/octet-stream";

// Common output message prefixes
pub const SIZE_PREFIX: &str = "📊";
pub const SUCCESS_PREFIX: &str = "✅";
pub const START_PREFIX: &str = "🚀";
pub const FOLDER_PREFIX: &str = "📁";
