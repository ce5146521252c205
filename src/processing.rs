use crate::constants::{DEFAULT_QUALITY, JPEG_MIME, MAX_QUALITY, MIN_MARKER, MIN_QUALITY};
use crate::error::{CompressionError, Result};
use crate::formats::sniff_content_type;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where recompressed output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Write `<stem>_min.<ext>` next to the source, leaving the source untouched.
    #[default]
    Sibling,
    /// Replace the source file's contents.
    Rewrite,
}

impl OutputMode {
    pub fn from_rewrite_flag(rewrite: bool) -> Self {
        if rewrite {
            OutputMode::Rewrite
        } else {
            OutputMode::Sibling
        }
    }

    pub fn destination(&self, source: &Path) -> PathBuf {
        match self {
            OutputMode::Sibling => sibling_output_path(source),
            OutputMode::Rewrite => source.to_path_buf(),
        }
    }
}

/// Run-wide settings. Built once from the command line and never mutated.
#[derive(Debug, Clone)]
pub struct CompressionOptions {
    pub quality: u8,
    pub mode: OutputMode,
    pub sniff_content: bool,
}

impl CompressionOptions {
    pub fn new(quality: Option<u8>, mode: OutputMode, sniff_content: bool) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(CompressionError::InvalidQuality(quality));
        }

        Ok(Self {
            quality,
            mode,
            sniff_content,
        })
    }
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            mode: OutputMode::Sibling,
            sniff_content: true,
        }
    }
}

/// Outcome of recompressing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub original_size: u64,
    pub compressed_size: u64,
}

/// Builds `<dir>/<stem>_min.<ext>` for a source path.
///
/// # Example
/// ```
/// use std::path::{Path, PathBuf};
/// use jpeg_min::sibling_output_path;
///
/// assert_eq!(
///     sibling_output_path(Path::new("foo/bar.jpg")),
///     PathBuf::from("foo/bar_min.jpg")
/// );
/// ```
pub fn sibling_output_path(source: &Path) -> PathBuf {
    // Built from the raw OS string so non-UTF-8 names survive unchanged.
    let mut file_name = source.file_stem().unwrap_or_default().to_os_string();
    file_name.push(MIN_MARKER);
    if let Some(ext) = source.extension() {
        file_name.push(".");
        file_name.push(ext);
    }
    source.with_file_name(file_name)
}

pub fn decode_jpeg(data: &[u8]) -> ImageResult<DynamicImage> {
    image::load_from_memory_with_format(data, ImageFormat::Jpeg)
}

/// Encodes `img` as baseline JPEG. Only the quality is set; subsampling and the
/// remaining encoder parameters stay at the codec defaults.
pub fn encode_jpeg<W: Write>(img: &DynamicImage, writer: W, quality: u8) -> ImageResult<()> {
    let encoder = JpegEncoder::new_with_quality(writer, quality);
    img.write_with_encoder(encoder)
}

/// Decodes JPEG bytes and re-encodes them in memory.
/// `path` is only used for error context.
pub fn recompress_jpeg(data: &[u8], quality: u8, path: &Path) -> Result<Vec<u8>> {
    let img = decode_jpeg(data).map_err(|source| CompressionError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let mut encoded = Vec::with_capacity(data.len());
    encode_jpeg(&img, &mut encoded, quality).map_err(|source| CompressionError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(encoded)
}

/// Recompresses a single file according to `options`.
///
/// The source is read fully and its handle closed before the destination is
/// opened, so rewrite mode can safely truncate the same path. Output is encoded
/// into memory first; a decode or encode failure leaves the destination alone.
///
/// # Errors
/// * `ContentMismatch` when sniffing is enabled and the bytes are not JPEG
/// * `Decode` / `Encode` for codec failures
/// * `Io` for read or write failures
pub fn process_jpeg_file(source: &Path, options: &CompressionOptions) -> Result<FileReport> {
    let data = fs::read(source).map_err(|e| CompressionError::io(source, e))?;

    if options.sniff_content {
        let detected = sniff_content_type(&data);
        if detected != JPEG_MIME {
            return Err(CompressionError::ContentMismatch {
                path: source.to_path_buf(),
                detected,
            });
        }
    }

    let encoded = recompress_jpeg(&data, options.quality, source)?;

    let destination = options.mode.destination(source);
    write_output(&destination, &encoded)?;

    Ok(FileReport {
        source: source.to_path_buf(),
        destination,
        original_size: data.len() as u64,
        compressed_size: encoded.len() as u64,
    })
}

// Create-or-truncate, so a shorter encoding never leaves stale trailing bytes.
fn write_output(destination: &Path, bytes: &[u8]) -> Result<()> {
    let mut file =
        fs::File::create(destination).map_err(|e| CompressionError::io(destination, e))?;
    file.write_all(bytes)
        .map_err(|e| CompressionError::io(destination, e))?;
    file.flush().map_err(|e| CompressionError::io(destination, e))
}
