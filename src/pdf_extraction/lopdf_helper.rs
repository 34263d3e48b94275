// lopdf helper - Pure Rust PDF text extraction
use crate::types::{DocsortError, Result};
use lopdf::Document;
use std::path::Path;

/// Load a PDF document using lopdf
pub fn load_pdf(path: &Path) -> Result<Document> {
    Document::load(path).map_err(|e| DocsortError::Pdf(format!("{}: {}", path.display(), e)))
}

/// Execute an operation with a PDF document
pub fn with_pdf<F, R>(path: &Path, f: F) -> Result<R>
where
    F: FnOnce(&Document) -> Result<R>,
{
    let document = load_pdf(path)?;
    f(&document)
}

/// Text of every page in page order, joined with a single space.
pub fn extract_all_pages(path: &Path) -> Result<String> {
    with_pdf(path, |document| {
        let mut pages = Vec::new();
        for page_num in document.get_pages().keys() {
            let text = document
                .extract_text(&[*page_num])
                .map_err(|e| DocsortError::Pdf(format!("page {}: {}", page_num, e)))?;
            pages.push(text);
        }
        Ok(pages.join(" "))
    })
}
