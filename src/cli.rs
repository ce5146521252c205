use crate::constants::DEFAULT_QUALITY;
use crate::error::Result;
use crate::processing::{CompressionOptions, OutputMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "jpeg-min",
    about = "Recursively recompress JPEG files in a directory tree",
    long_about = "jpeg-min walks a directory tree, finds .jpg/.jpeg files and re-encodes each \
                  one at the requested quality. By default the result is written next to the \
                  original as <name>_min.<ext>; files whose path already contains \"_min\" are \
                  never picked up again.",
    version,
    after_help = "EXAMPLES:\n  \
    jpeg-min ./photos\n  \
    jpeg-min ./photos -q 75\n  \
    jpeg-min ./photos -q 50 -r"
)]
pub struct Args {
    #[arg(help = "Directory (or single file) to scan")]
    pub path: PathBuf,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        help = "JPEG quality (1-100)",
        long_help = "JPEG quality from 1 (smallest) to 100 (best). \
                     Applied to every file in the run."
    )]
    pub quality: u8,

    #[arg(
        short = 'r',
        long,
        help = "Overwrite originals instead of writing _min copies"
    )]
    pub rewrite: bool,

    #[arg(
        long,
        help = "Do not check file content before decoding",
        long_help = "Skip content sniffing. Files with a .jpg/.jpeg extension but non-JPEG \
                     content then abort the run with a decode error instead of being skipped."
    )]
    pub no_sniff: bool,

    #[arg(short = 'v', long, help = "Print per-file details")]
    pub verbose: bool,

    #[arg(long, help = "Only print errors")]
    pub quiet: bool,
}

impl Args {
    pub fn compression_options(&self) -> Result<CompressionOptions> {
        CompressionOptions::new(
            Some(self.quality),
            OutputMode::from_rewrite_flag(self.rewrite),
            !self.no_sniff,
        )
    }
}
