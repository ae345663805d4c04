//! Derivation of contiguous page ranges from a list of split points.
//!
//! A split point `p` is used directly as a 0-based boundary index: the output
//! document that begins at `p` covers 0-based pages `[p, next)`, i.e. 1-based
//! pages `p + 1 ..= next`. Pages before the first split point are deliberately
//! not emitted.

/// Convert split points plus a total page count into non-overlapping,
/// half-open `(start, end)` ranges, 0-based.
///
/// The points are re-sorted here even though the validator already enforces
/// order, so the function is safe to call standalone. `end` is clamped to
/// `total_pages`, degenerate ranges are discarded, and a trailing range up to
/// the end of the document is appended when the last point leaves room for
/// one. A single split point equal to `total_pages` therefore yields no
/// ranges at all.
pub fn generate_ranges(split_points: &[u32], total_pages: u32) -> Vec<(u32, u32)> {
    if split_points.is_empty() {
        return Vec::new();
    }

    let mut points = split_points.to_vec();
    points.sort_unstable();

    let mut ranges = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        let start = pair[0];
        let end = pair[1].min(total_pages);
        if start < end {
            ranges.push((start, end));
        }
    }

    if let Some(&last) = points.last() {
        if last < total_pages {
            ranges.push((last, total_pages));
        }
    }

    ranges
}
