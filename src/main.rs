use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;

use extract_exercises::cli::Cli;
use extract_exercises::{logging, ExerciseExtractor};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli
        .extract_config()
        .context("Failed to load extraction options")?;
    tracing::debug!(?config, files = cli.files.len(), "starting extraction");

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file {}", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let result = ExerciseExtractor::new(config).extract_paths(&cli.files, &mut out);
    // Keep whatever was extracted before a failure.
    let flushed = out.flush();

    result?;
    flushed.context("Failed to flush extracted output")?;
    Ok(())
}
