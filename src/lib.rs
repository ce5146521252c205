pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod processing;
pub mod utils;

pub use batch::{batch_compress_jpegs, collect_files, is_jpeg_candidate, BatchSummary};
pub use error::{CompressionError, Result};
pub use formats::sniff_content_type;
pub use processing::{
    decode_jpeg, encode_jpeg, process_jpeg_file, recompress_jpeg, sibling_output_path,
    CompressionOptions, FileReport, OutputMode,
};
