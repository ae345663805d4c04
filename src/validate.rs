use crate::error::{Result, SplitError};
use std::path::Path;

/// Check the structural preconditions on user input before any PDF I/O.
///
/// The input file must exist and carry a `.pdf` extension (case-insensitive),
/// and at least one positive split point must be given. Negative page numbers
/// are unrepresentable as `u32` and already rejected at argument parse time,
/// so only zero needs checking here.
pub fn validate_input(input: &Path, split_points: &[u32]) -> Result<()> {
    if !input.exists() {
        return Err(SplitError::NotFound(input.to_path_buf()));
    }

    let is_pdf = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf {
        return Err(SplitError::InvalidFormat(input.to_path_buf()));
    }

    if split_points.is_empty() {
        return Err(SplitError::InvalidArgument(
            "at least one split point is required".to_string(),
        ));
    }

    if split_points.contains(&0) {
        return Err(SplitError::InvalidArgument(
            "page numbers must be positive".to_string(),
        ));
    }

    Ok(())
}

/// Check the split points against the document's actual page count.
///
/// The points must be strictly ascending as given (this tool does not reorder
/// on the caller's behalf) and must all fall within `1..=total_pages`.
pub fn validate_page_ranges(split_points: &[u32], total_pages: u32) -> Result<()> {
    if split_points.is_empty() {
        return Ok(());
    }

    if !split_points.windows(2).all(|pair| pair[0] < pair[1]) {
        return Err(SplitError::InvalidArgument(
            "split points must be in strictly ascending order".to_string(),
        ));
    }

    if let Some(&first) = split_points.first() {
        if first < 1 {
            return Err(SplitError::InvalidArgument(
                "page numbers must be positive".to_string(),
            ));
        }
    }

    if let Some(&last) = split_points.last() {
        if last > total_pages {
            return Err(SplitError::InvalidArgument(format!(
                "split point {} exceeds the document's {} pages",
                last, total_pages
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn missing_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.pdf");
        let err = validate_input(&missing, &[1]).unwrap_err();
        assert!(matches!(err, SplitError::NotFound(_)));
    }

    #[test]
    fn non_pdf_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        File::create(&path).unwrap();
        let err = validate_input(&path, &[1]).unwrap_err();
        assert!(matches!(err, SplitError::InvalidFormat(_)));
    }

    #[test]
    fn uppercase_pdf_extension_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("REPORT.PDF");
        File::create(&path).unwrap();
        assert!(validate_input(&path, &[1]).is_ok());
    }

    #[test]
    fn empty_split_points_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        File::create(&path).unwrap();
        let err = validate_input(&path, &[]).unwrap_err();
        assert!(matches!(err, SplitError::InvalidArgument(_)));
    }

    #[test]
    fn zero_split_point_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        File::create(&path).unwrap();
        let err = validate_input(&path, &[0, 3]).unwrap_err();
        assert!(matches!(err, SplitError::InvalidArgument(_)));
    }

    #[test]
    fn unsorted_points_are_rejected() {
        let err = validate_page_ranges(&[5, 2], 10).unwrap_err();
        assert!(matches!(err, SplitError::InvalidArgument(_)));
    }

    #[test]
    fn duplicate_points_are_rejected() {
        let err = validate_page_ranges(&[3, 3], 10).unwrap_err();
        assert!(matches!(err, SplitError::InvalidArgument(_)));
    }

    #[test]
    fn point_past_end_of_document_is_rejected() {
        let err = validate_page_ranges(&[3, 12], 10).unwrap_err();
        assert!(matches!(err, SplitError::InvalidArgument(_)));
    }

    #[test]
    fn in_bounds_ascending_points_are_accepted() {
        assert!(validate_page_ranges(&[3, 6, 10], 10).is_ok());
    }

    #[test]
    fn empty_points_are_vacuously_valid() {
        assert!(validate_page_ranges(&[], 10).is_ok());
    }
}
