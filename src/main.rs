mod batch;
mod cli;
mod error;
mod pdf;
mod ranges;
mod retry;
mod split;
mod validate;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("Splitting {}", cli.input.display());
    println!("Split points: {:?}", cli.pages);
    println!("Output directory: {}", cli.output.display());

    let output_files = split::split_pdf(&cli.input, &cli.pages, &cli.output)?;

    println!("Done. Generated {} file(s):", output_files.len());
    for (i, path) in output_files.iter().enumerate() {
        println!("  {}. {}", i + 1, path.display());
    }

    Ok(())
}
