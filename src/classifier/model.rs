// Fitted vocabulary + classifier pair, persisted as one JSON artifact
use super::featurizer::TfidfVectorizer;
use super::logistic::{FitReport, LogisticRegression, TrainingParams};
use crate::types::{DocsortError, Document, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    vectorizer: TfidfVectorizer,
    classifier: LogisticRegression,
}

impl Model {
    /// Fit a fresh vocabulary and classifier over every document.
    pub fn train(
        documents: &[Document],
        max_features: usize,
        params: TrainingParams,
    ) -> Result<(Self, FitReport)> {
        if documents.is_empty() {
            return Err(DocsortError::EmptyDataset);
        }

        let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
        let labels: Vec<String> = documents.iter().map(|d| d.label.clone()).collect();

        let vectorizer = TfidfVectorizer::fit(&texts, max_features)?;
        let x = vectorizer.transform_all(&texts);
        let (classifier, report) = LogisticRegression::fit(&x, &labels, params)?;

        info!(
            documents = documents.len(),
            features = vectorizer.dimension(),
            classes = ?classifier.classes(),
            "model trained"
        );
        Ok((Self { vectorizer, classifier }, report))
    }

    pub fn featurize(&self, text: &str) -> Array1<f64> {
        self.vectorizer.transform(text)
    }

    pub fn predict(&self, text: &str) -> Result<&str> {
        self.classifier.predict(self.featurize(text).view())
    }

    /// Class probabilities paired with class names, in class order.
    pub fn predict_proba(&self, text: &str) -> Result<Vec<(&str, f64)>> {
        let probs = self.classifier.predict_proba(self.featurize(text).view())?;
        Ok(self
            .classifier
            .classes()
            .iter()
            .map(String::as_str)
            .zip(probs.iter().copied())
            .collect())
    }

    pub fn classes(&self) -> &[String] {
        self.classifier.classes()
    }

    /// Overwrites any existing artifact at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer(&mut tmp, self)?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| DocsortError::Io(e.error))?;

        info!(path = %path.display(), "model saved");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut model: Self = serde_json::from_str(&content)?;
        model.vectorizer.rebuild_index();
        info!(path = %path.display(), classes = ?model.classes(), "model loaded");
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Document> {
        vec![
            Document::new(
                "a_invoice.pdf",
                "Invoice number 17. Amount payable $120.00 subtotal tax",
                "invoice",
            ),
            Document::new(
                "b_resume.pdf",
                "Curriculum vitae. Experience skills education references",
                "resume",
            ),
            Document::new(
                "c.pdf",
                "Abstract. We propose a neural method; experiments and results",
                "paper",
            ),
        ]
    }

    #[test]
    fn trained_model_recovers_training_labels() {
        let docs = corpus();
        let (model, _) = Model::train(&docs, 5000, TrainingParams::default()).unwrap();
        for doc in &docs {
            assert_eq!(model.predict(&doc.text).unwrap(), doc.label);
        }
    }

    #[test]
    fn saved_model_predicts_the_same_after_reload() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("model.json");
        let docs = corpus();
        let (model, _) = Model::train(&docs, 5000, TrainingParams::default()).unwrap();
        model.save(&path).unwrap();

        let reloaded = Model::load(&path).unwrap();
        assert_eq!(reloaded.classes(), model.classes());
        for doc in &docs {
            assert_eq!(reloaded.featurize(&doc.text), model.featurize(&doc.text));
            assert_eq!(reloaded.predict(&doc.text).unwrap(), model.predict(&doc.text).unwrap());
        }
    }

    #[test]
    fn save_overwrites_previous_artifact() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, "stale").unwrap();
        let (model, _) = Model::train(&corpus(), 5000, TrainingParams::default()).unwrap();
        model.save(&path).unwrap();
        assert!(Model::load(&path).is_ok());
    }

    #[test]
    fn all_empty_texts_fail_training() {
        let docs = vec![
            Document::new("invoice.pdf", "", "invoice"),
            Document::new("paper.pdf", "   ", "paper"),
        ];
        assert!(matches!(
            Model::train(&docs, 5000, TrainingParams::default()),
            Err(DocsortError::EmptyVocabulary)
        ));
    }

    #[test]
    fn one_label_fails_training() {
        let docs = vec![
            Document::new("x.pdf", "graph neural networks", "paper"),
            Document::new("y.pdf", "protein folding", "paper"),
        ];
        assert!(matches!(
            Model::train(&docs, 5000, TrainingParams::default()),
            Err(DocsortError::SingleClass { .. })
        ));
    }

    #[test]
    fn empty_text_still_predicts_a_known_class() {
        let (model, _) = Model::train(&corpus(), 5000, TrainingParams::default()).unwrap();
        let label = model.predict("").unwrap();
        assert!(model.classes().iter().any(|c| c == label));
        let probs = model.predict_proba("").unwrap();
        assert_eq!(probs.len(), 3);
    }
}
