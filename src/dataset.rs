// Dataset builder: PDFs in a directory -> weakly labeled documents
use crate::pdf_extraction::TextExtractor;
use crate::types::Document;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

pub const INVOICE: &str = "invoice";
pub const RESUME: &str = "resume";
pub const PAPER: &str = "paper";

/// Maps a file path to a training label.
pub trait LabelStrategy {
    fn label_for(&self, path: &Path) -> String;
}

/// Case-insensitive substring rules on the file name; first match wins.
#[derive(Debug, Clone)]
pub struct FilenameLabeler {
    rules: Vec<(String, String)>,
    fallback: String,
}

impl FilenameLabeler {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Append a rule. Rules are tried in insertion order.
    pub fn with_rule(mut self, needle: &str, label: impl Into<String>) -> Self {
        self.rules.push((needle.to_lowercase(), label.into()));
        self
    }
}

impl Default for FilenameLabeler {
    fn default() -> Self {
        Self::new(PAPER).with_rule(INVOICE, INVOICE).with_rule(RESUME, RESUME)
    }
}

impl LabelStrategy for FilenameLabeler {
    fn label_for(&self, path: &Path) -> String {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        self.rules
            .iter()
            .find(|(needle, _)| name.contains(needle.as_str()))
            .map(|(_, label)| label.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

fn is_pdf(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("pdf")
}

/// Every `*.pdf` directly inside `dir`, in directory enumeration order.
pub fn pdf_files(dir: &Path) -> Vec<std::path::PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot read data directory");
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_pdf(path))
        .collect()
}

/// Build the dataset. Never fails; unreadable PDFs get empty text.
pub fn build_dataset(
    dir: &Path,
    extractor: &dyn TextExtractor,
    labeler: &dyn LabelStrategy,
) -> Vec<Document> {
    let documents: Vec<Document> = pdf_files(dir)
        .into_iter()
        .map(|path| {
            let text = extractor.extract_text(&path);
            let label = labeler.label_for(&path);
            debug!(
                path = %path.display(),
                label = %label,
                chars = text.chars().count(),
                "document extracted"
            );
            Document::new(path, text, label)
        })
        .collect();

    info!(dir = %dir.display(), count = documents.len(), "dataset built");
    documents
}
