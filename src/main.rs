use clap::Parser;
use jpeg_min::cli::Args;
use jpeg_min::{batch_compress_jpegs, logger, Result};
use std::process;

fn main() {
    let args = Args::parse();
    logger::init(args.quiet, args.verbose);

    if let Err(e) = run(&args) {
        jpeg_min::error!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let options = args.compression_options()?;
    batch_compress_jpegs(&args.path, &options)?;
    Ok(())
}
