// build -> train -> reload -> predict-and-store
use crate::classifier::{Model, TrainingParams};
use crate::config::PipelineConfig;
use crate::dataset::{build_dataset, FilenameLabeler, LabelStrategy};
use crate::metadata::ner::{EntityRecognizer, HeuristicRecognizer};
use crate::metadata::MetadataExtractor;
use crate::pdf_extraction::{LopdfExtractor, TextExtractor};
use crate::storage::{DocumentStore, StoredRow};
use crate::types::{Document, Result};
use tracing::{debug, info, Level};

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub documents: usize,
    pub rows_written: usize,
    pub iterations: usize,
    pub converged: bool,
    pub label_counts: Vec<(String, usize)>,
}

/// External collaborators the pipeline is wired with.
pub struct Collaborators<'a> {
    pub extractor: &'a dyn TextExtractor,
    pub labeler: &'a dyn LabelStrategy,
    pub recognizer: &'a dyn EntityRecognizer,
}

/// Run with lopdf extraction, filename labels and the heuristic recognizer.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let recognizer = HeuristicRecognizer::new();
    let labeler = FilenameLabeler::default();
    run_with(
        config,
        &Collaborators {
            extractor: &LopdfExtractor,
            labeler: &labeler,
            recognizer: &recognizer,
        },
    )
}

pub fn run_with(config: &PipelineConfig, collab: &Collaborators<'_>) -> Result<RunSummary> {
    let documents = build_dataset(&config.data_dir, collab.extractor, collab.labeler);

    let params = TrainingParams {
        max_iter: config.max_iter,
        ..TrainingParams::default()
    };
    let (model, report) = Model::train(&documents, config.max_features, params)?;
    model.save(&config.model_path)?;
    println!("[OK] Model trained and saved");
    drop(model);

    let model = Model::load(&config.model_path)?;

    let mut store = DocumentStore::open(&config.db_path)?;
    let extractor = MetadataExtractor::new(collab.recognizer);
    let rows_written = predict_and_store(&documents, &model, &extractor, &mut store)?;
    let label_counts = store.label_counts()?;
    let total_rows = store.count()?;
    println!("[OK] Results stored in {}", config.db_path.display());
    info!(rows = rows_written, total_rows, ?label_counts, "results stored");

    Ok(RunSummary {
        documents: documents.len(),
        rows_written,
        iterations: report.iterations,
        converged: report.converged,
        label_counts,
    })
}

/// Predict, extract and append one row per document; commits once at the end.
pub fn predict_and_store(
    documents: &[Document],
    model: &Model,
    extractor: &MetadataExtractor<'_>,
    store: &mut DocumentStore,
) -> Result<usize> {
    let mut writer = store.writer()?;

    for doc in documents {
        let label = model.predict(&doc.text)?;
        if tracing::enabled!(Level::DEBUG) {
            let probabilities = model.predict_proba(&doc.text)?;
            debug!(path = %doc.path.display(), ?probabilities, "prediction");
        }
        let meta = extractor.extract(label, &doc.text);

        let row = StoredRow {
            path: doc.display_path(),
            label: label.to_string(),
            meta: meta.to_string(),
        };
        writer.append(&row)?;

        println!("[OK] {} → {} → {}", row.path, row.label, row.meta);
        info!(path = %row.path, label = %row.label, "document classified");
    }

    writer.commit()
}
