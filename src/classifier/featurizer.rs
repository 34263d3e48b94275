// TF-IDF featurizer over a bounded, alphabetically indexed vocabulary
use super::stopwords::is_stopword;
use crate::types::{DocsortError, Result};
use ndarray::{Array1, Array2};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid token regex"));

/// Lowercased tokens of two or more word characters, stop words removed.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !is_stopword(t))
        .map(str::to_string)
        .collect()
}

fn term_counts(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Terms in column order (alphabetical).
    terms: Vec<String>,
    idf: Vec<f64>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl TfidfVectorizer {
    /// Fit the vocabulary and IDF weights over `corpus`.
    pub fn fit<S: AsRef<str>>(corpus: &[S], max_features: usize) -> Result<Self> {
        let per_doc: Vec<HashMap<String, usize>> =
            corpus.iter().map(|t| term_counts(t.as_ref())).collect();

        let mut total: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for counts in &per_doc {
            for (term, n) in counts {
                *total.entry(term.as_str()).or_insert(0) += n;
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }
        if total.is_empty() {
            return Err(DocsortError::EmptyVocabulary);
        }

        // Most frequent terms win; ties go to the alphabetically smaller term
        let mut ranked: Vec<(&str, usize)> = total.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(max_features);

        let mut terms: Vec<String> = ranked.iter().map(|(t, _)| t.to_string()).collect();
        terms.sort();

        let n = corpus.len() as f64;
        let idf = terms
            .iter()
            .map(|t| {
                let df = doc_freq[t.as_str()] as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let mut vectorizer = Self {
            terms,
            idf,
            index: HashMap::new(),
        };
        vectorizer.rebuild_index();
        Ok(vectorizer)
    }

    /// Needed after deserializing, the index is not persisted.
    pub(crate) fn rebuild_index(&mut self) {
        self.index = self
            .terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
    }

    pub fn dimension(&self) -> usize {
        self.terms.len()
    }

    /// L2-normalized TF-IDF vector. Unknown terms are ignored; never refits.
    pub fn transform(&self, text: &str) -> Array1<f64> {
        let mut v = Array1::<f64>::zeros(self.dimension());
        for (term, count) in term_counts(text) {
            if let Some(&col) = self.index.get(&term) {
                v[col] = count as f64 * self.idf[col];
            }
        }
        let norm = v.dot(&v).sqrt();
        if norm > 0.0 {
            v /= norm;
        }
        v
    }

    pub fn transform_all<S: AsRef<str>>(&self, corpus: &[S]) -> Array2<f64> {
        let mut m = Array2::<f64>::zeros((corpus.len(), self.dimension()));
        for (i, text) in corpus.iter().enumerate() {
            m.row_mut(i).assign(&self.transform(text.as_ref()));
        }
        m
    }
}
