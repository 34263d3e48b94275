// docsort: label PDFs by type and extract per-type metadata
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod metadata;
pub mod pdf_extraction;
pub mod pipeline;
pub mod storage;
pub mod types;

pub use config::PipelineConfig;
pub use types::{DocsortError, Document, Result};
