use crate::batch::process_ranges;
use crate::error::Result;
use crate::pdf::PdfDocument;
use crate::validate::{validate_input, validate_page_ranges};
use std::fs;
use std::path::{Path, PathBuf};

/// Split a PDF at the given page boundaries and write one document per range
/// into `output_dir` as `split_1.pdf`, `split_2.pdf`, ...
///
/// Returns the written paths in range order. Validation failures abort before
/// any file is touched; an extraction that still fails after its retries
/// propagates unchanged, leaving earlier output files in place.
pub fn split_pdf<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    split_points: &[u32],
    output_dir: Q,
) -> Result<Vec<PathBuf>> {
    let input = input.as_ref();
    let output_dir = output_dir.as_ref();

    validate_input(input, split_points)?;

    let doc = PdfDocument::open(input)?;
    let total_pages = doc.page_count();
    validate_page_ranges(split_points, total_pages)?;

    fs::create_dir_all(output_dir)?;

    process_ranges(split_points, total_pages, |start, end, index| {
        let output_path = output_dir.join(format!("split_{}.pdf", index + 1));
        let mut extracted = doc.extract_range(start, end)?;
        PdfDocument::save(&mut extracted, &output_path)?;
        Ok(output_path)
    })
}
