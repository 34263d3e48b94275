use docsort::dataset::FilenameLabeler;
use docsort::metadata::ner::HeuristicRecognizer;
use docsort::pipeline::{run_with, Collaborators};
use docsort::storage::DocumentStore;
use docsort::{DocsortError, PipelineConfig};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
    texts: HashMap<String, String>,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("data")).unwrap();
        Self {
            dir,
            texts: HashMap::new(),
        }
    }

    /// Creates a placeholder PDF whose "extracted" text is `text`.
    fn add_pdf(&mut self, name: &str, text: &str) {
        fs::write(self.dir.path().join("data").join(name), b"%PDF-1.4 placeholder").unwrap();
        self.texts.insert(name.to_string(), text.to_string());
    }

    fn config(&self) -> PipelineConfig {
        PipelineConfig {
            data_dir: self.dir.path().join("data"),
            model_path: self.dir.path().join("model.json"),
            db_path: self.dir.path().join("docs.sqlite"),
            ..PipelineConfig::default()
        }
    }

    fn run(&self) -> docsort::Result<docsort::pipeline::RunSummary> {
        let texts = &self.texts;
        let extractor = |p: &Path| {
            let name = p.file_name().unwrap().to_string_lossy().into_owned();
            texts.get(&name).cloned().unwrap_or_default()
        };
        let labeler = FilenameLabeler::default();
        let recognizer = HeuristicRecognizer::new();
        run_with(
            &self.config(),
            &Collaborators {
                extractor: &extractor,
                labeler: &labeler,
                recognizer: &recognizer,
            },
        )
    }
}

fn three_document_workspace() -> Workspace {
    let mut ws = Workspace::new();
    ws.add_pdf(
        "acme_invoice.pdf",
        "ACME Supplies\nInvoice for services rendered\nItem widgets quantity\n\
         Total due: $123.45 today\nPayable within thirty days",
    );
    ws.add_pdf(
        "jane_resume.pdf",
        "Jane Doe\njane.doe@example.com\n+1 555 123 4567\n\
         Skills: rust python\nWork history: engineer at startup",
    );
    ws.add_pdf(
        "widgets.pdf",
        "Intro to Widgets\nBy A. Smith\n\n\
         Abstract: we study widget theory with experiments and proofs",
    );
    ws
}

#[test]
fn three_documents_train_and_store_their_own_labels() {
    let ws = three_document_workspace();
    let summary = ws.run().expect("pipeline should succeed");

    assert_eq!(summary.documents, 3);
    assert_eq!(summary.rows_written, 3);
    assert!(summary.iterations <= 200);
    assert!(ws.dir.path().join("model.json").exists());

    let store = DocumentStore::open(&ws.config().db_path).unwrap();
    let rows = store.list_rows().unwrap();
    assert_eq!(rows.len(), 3);

    let by_file: HashMap<String, (String, String)> = rows
        .into_iter()
        .map(|r| {
            let name = Path::new(&r.path).file_name().unwrap().to_string_lossy().into_owned();
            (name, (r.label, r.meta))
        })
        .collect();

    let (label, meta) = &by_file["acme_invoice.pdf"];
    assert_eq!(label, "invoice");
    assert_eq!(meta, "{'total': '$123.45'}");

    let (label, meta) = &by_file["jane_resume.pdf"];
    assert_eq!(label, "resume");
    assert_eq!(
        meta,
        "{'name': 'Jane Doe', 'email': 'jane.doe@example.com', 'phone': '+1 555 123 4567\\n'}"
    );

    let (label, meta) = &by_file["widgets.pdf"];
    assert_eq!(label, "paper");
    assert_eq!(meta, "{'title': 'Intro to Widgets', 'authors': 'A. Smith'}");
}

#[test]
fn rerunning_appends_duplicate_rows() {
    let ws = three_document_workspace();
    ws.run().unwrap();
    ws.run().unwrap();

    let store = DocumentStore::open(&ws.config().db_path).unwrap();
    assert_eq!(store.count().unwrap(), 6);
    assert_eq!(
        store.label_counts().unwrap(),
        vec![
            ("invoice".to_string(), 2),
            ("paper".to_string(), 2),
            ("resume".to_string(), 2)
        ]
    );
}

#[test]
fn single_label_corpus_aborts_before_storing() {
    let mut ws = Workspace::new();
    ws.add_pdf("a.pdf", "graph theory results");
    ws.add_pdf("b.pdf", "protein folding results");

    let err = ws.run().unwrap_err();
    assert!(matches!(err, DocsortError::SingleClass { ref label } if label == "paper"));
    assert!(!ws.dir.path().join("docs.sqlite").exists());
}

#[test]
fn all_empty_texts_abort_training() {
    let mut ws = Workspace::new();
    ws.add_pdf("invoice_1.pdf", "");
    ws.add_pdf("resume_1.pdf", "");

    assert!(matches!(ws.run(), Err(DocsortError::EmptyVocabulary)));
}

#[test]
fn empty_directory_is_reported() {
    let ws = Workspace::new();
    assert!(matches!(ws.run(), Err(DocsortError::EmptyDataset)));
}
