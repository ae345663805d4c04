use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfsplit")]
#[command(about = "Split a PDF into sub-documents at page boundaries")]
#[command(version)]
pub struct Cli {
    /// PDF file to split
    pub input: PathBuf,

    /// Split points: page numbers where a new document begins (e.g. 2 4 6)
    #[arg(required = true)]
    pub pages: Vec<u32>,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,
}
