use crate::constants::{
    FOLDER_PREFIX, JPEG_EXTENSIONS, MIN_MARKER, SIZE_PREFIX, START_PREFIX, SUCCESS_PREFIX,
};
use crate::error::Result;
use crate::processing::{process_jpeg_file, CompressionOptions, OutputMode};
use crate::utils::{calculate_compression_ratio, format_file_size};
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Totals for one run over a directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub compressed: usize,
    pub skipped: usize,
    pub total_original_size: u64,
    pub total_compressed_size: u64,
}

impl BatchSummary {
    pub fn compression_ratio(&self) -> f64 {
        calculate_compression_ratio(self.total_original_size, self.total_compressed_size)
    }
}

/// Recursively lists every non-directory entry under `root` accepted by `filter`.
///
/// The root itself is included when it is a file. Entries come back in lexical
/// order within each directory. Symlinks are not followed.
///
/// # Errors
/// Any walk error (missing root, unreadable directory) aborts the whole walk;
/// no partial list is returned.
pub fn collect_files<F>(root: &Path, filter: F) -> Result<Vec<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if filter(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Accepts `.jpg`/`.jpeg` paths (case-sensitive) that do not contain `_min`.
///
/// The marker check runs on the whole path string, so anything below a
/// directory like `sub_min/` is rejected as well.
pub fn is_jpeg_candidate(path: &Path) -> bool {
    if path.to_string_lossy().contains(MIN_MARKER) {
        return false;
    }

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| JPEG_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Walks `root` and recompresses every candidate JPEG, one file at a time.
///
/// Files whose content is not JPEG are skipped with a warning. Any other error
/// stops the run and is returned to the caller.
pub fn batch_compress_jpegs(root: &Path, options: &CompressionOptions) -> Result<BatchSummary> {
    crate::info!("{} Scanning for JPEG files...", START_PREFIX);
    crate::info!("{} Root: {:?}", FOLDER_PREFIX, root);

    let start_time = Instant::now();

    let jpeg_files = collect_files(root, is_jpeg_candidate)?;
    let total_files = jpeg_files.len();

    if total_files == 0 {
        crate::warn!("No JPEG files found under {:?}", root);
        return Ok(BatchSummary::default());
    }

    crate::info!(
        "{} Found {} JPEG files (quality {}, {})",
        SIZE_PREFIX,
        total_files,
        options.quality,
        match options.mode {
            OutputMode::Sibling => "writing _min copies",
            OutputMode::Rewrite => "rewriting in place",
        }
    );

    let mut summary = BatchSummary::default();

    for path in &jpeg_files {
        match process_jpeg_file(path, options) {
            Ok(report) => {
                crate::verbose!(
                    "{:?} -> {:?}: {} -> {}",
                    report.source,
                    report.destination,
                    format_file_size(report.original_size),
                    format_file_size(report.compressed_size)
                );
                summary.compressed += 1;
                summary.total_original_size += report.original_size;
                summary.total_compressed_size += report.compressed_size;
            }
            Err(e) if e.is_recoverable() => {
                crate::warn!("Skipping: {}", e);
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    let elapsed_time = start_time.elapsed();

    crate::info!("\n{} Compression Summary:", SIZE_PREFIX);
    crate::info!("  {} Files compressed: {}", SUCCESS_PREFIX, summary.compressed);
    if summary.skipped > 0 {
        crate::info!("  ⚠️  Files skipped: {}", summary.skipped);
    }
    crate::info!(
        "  {} Total original size: {}",
        SIZE_PREFIX,
        format_file_size(summary.total_original_size)
    );
    crate::info!(
        "  {} Total compressed size: {}",
        SIZE_PREFIX,
        format_file_size(summary.total_compressed_size)
    );
    crate::info!("  🎯 Overall compression ratio: {:.1}%", summary.compression_ratio());
    crate::info!("  ⏱️  Total time: {:?}", elapsed_time);

    Ok(summary)
}
