use crate::error::{Result, SplitError};
use lopdf::Document;
use std::path::Path;

/// An opened, read-only view of the input PDF.
///
/// Owned by the split service for the duration of one operation and shared by
/// reference across all range extractions; the source document is never
/// mutated.
#[derive(Debug)]
pub struct PdfDocument {
    doc: Document,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SplitError::NotFound(path.to_path_buf()));
        }
        let doc = Document::load(path).map_err(SplitError::Read)?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Extract the 0-based half-open page range `[start, end)` into a new
    /// document.
    ///
    /// Works by cloning the source and deleting every page outside the range;
    /// lopdf numbers pages from 1, so the range maps to 1-based pages
    /// `start + 1 ..= end`.
    pub fn extract_range(&self, start: u32, end: u32) -> Result<Document> {
        let total = self.page_count();
        if start >= end || end > total {
            return Err(SplitError::InvalidArgument(format!(
                "invalid page range: {}-{} (document has {} pages)",
                start, end, total
            )));
        }

        let mut new_doc = self.doc.clone();
        let pages_to_delete: Vec<u32> = (1..=total).filter(|&p| p <= start || p > end).collect();
        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }

        Ok(new_doc)
    }

    /// Persist an extracted document to a file.
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        doc.save(&path).map_err(|source| SplitError::Write {
            path: path.as_ref().to_path_buf(),
            source: lopdf::Error::IO(source),
        })?;
        Ok(())
    }
}

/// Build a small in-memory document with one text page per requested page,
/// for tests that need a real, loadable PDF.
#[cfg(test)]
pub(crate) fn sample_document(page_count: usize) -> Document {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let kids: Vec<Object> = (0..page_count)
        .map(|i| {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 700.into()]),
                    Operation::new(
                        "Tj",
                        vec![Object::string_literal(format!("Page {}", i + 1))],
                    ),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("encode content stream"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            page_id.into()
        })
        .collect();

    let kids_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => kids_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}
