//! CLI entry point for rendering framed Mondrian-style compositions

use clap::Parser;
use mondrian_frame::io::cli::{Cli, FileProcessor};
use mondrian_frame::io::logging;

fn main() -> mondrian_frame::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
