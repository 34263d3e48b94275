// Core types for docsort
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One PDF from the source directory, paired with its weak label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub path: PathBuf,
    /// Extracted plain text; empty when extraction failed.
    pub text: String,
    pub label: String,
}

impl Document {
    pub fn new(
        path: impl Into<PathBuf>,
        text: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            label: label.into(),
        }
    }

    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

// Error types
#[derive(Debug, thiserror::Error)]
pub enum DocsortError {
    #[error(
        "training needs samples of at least 2 classes, \
         but the data contains only one class: {label:?}"
    )]
    SingleClass { label: String },

    #[error("cannot train on an empty dataset")]
    EmptyDataset,

    #[error("empty vocabulary; perhaps the documents are empty or only contain stop words")]
    EmptyVocabulary,

    #[error("feature vector has {actual} dimensions, model expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("unknown class label: {0}")]
    UnknownClass(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocsortError>;
