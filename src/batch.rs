use crate::error::Result;
use crate::ranges::generate_ranges;
use crate::retry::retry_with;
use log::{error, info, warn};
use std::path::PathBuf;

const MAX_ATTEMPTS: usize = 3;

/// Process every split range in ascending order, retrying each extraction.
///
/// `extract` receives the 0-based half-open range plus its index in the range
/// sequence and returns the path it wrote. Each range gets up to three
/// immediate attempts; once a range exhausts its attempts the error
/// propagates and the remaining ranges are never started. Files already
/// written stay on disk.
pub fn process_ranges<F>(split_points: &[u32], total_pages: u32, mut extract: F) -> Result<Vec<PathBuf>>
where
    F: FnMut(u32, u32, usize) -> Result<PathBuf>,
{
    let ranges = generate_ranges(split_points, total_pages);
    let mut output_files = Vec::with_capacity(ranges.len());

    for (index, &(start, end)) in ranges.iter().enumerate() {
        info!("processing split range {}: {}-{}", index + 1, start, end);

        let output_file = retry_with(
            MAX_ATTEMPTS,
            || extract(start, end, index),
            |attempt, err| warn!("attempt {} for range {}-{} failed: {}", attempt, start, end, err),
        )
        .inspect_err(|err| {
            error!(
                "range {}-{} failed after {} attempts: {}",
                start, end, MAX_ATTEMPTS, err
            );
        })?;

        output_files.push(output_file);
    }

    Ok(output_files)
}
