// PDF extraction module
pub mod lopdf_helper;

use std::path::Path;
use tracing::warn;

/// Source of plain text for a document on disk.
///
/// Implementations never fail: an unreadable file yields an empty string.
pub trait TextExtractor {
    fn extract_text(&self, path: &Path) -> String;
}

/// Default extractor backed by lopdf.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfExtractor;

impl TextExtractor for LopdfExtractor {
    fn extract_text(&self, path: &Path) -> String {
        match lopdf_helper::extract_all_pages(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "text extraction failed, using empty text"
                );
                String::new()
            }
        }
    }
}

impl<F> TextExtractor for F
where
    F: Fn(&Path) -> String,
{
    fn extract_text(&self, path: &Path) -> String {
        self(path)
    }
}
