// Multinomial logistic regression trained by full-batch gradient descent
use crate::types::{DocsortError, Result};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const LEARNING_RATE: f64 = 1.0;
const TOLERANCE: f64 = 1e-4;

#[derive(Debug, Clone, Copy)]
pub struct TrainingParams {
    pub max_iter: usize,
    /// Inverse L2 regularization strength.
    pub c: f64,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            max_iter: crate::config::MAX_ITER,
            c: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitReport {
    pub iterations: usize,
    pub converged: bool,
    pub final_loss: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    classes: Vec<String>,
    /// One row per class.
    weights: Array2<f64>,
    intercept: Array1<f64>,
}

fn softmax_rows(scores: &mut Array2<f64>) {
    for mut row in scores.rows_mut() {
        let max = row.fold(f64::NEG_INFINITY, |m, &v| m.max(v));
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.sum();
        row /= sum;
    }
}

impl LogisticRegression {
    pub fn fit(
        x: &Array2<f64>,
        labels: &[String],
        params: TrainingParams,
    ) -> Result<(Self, FitReport)> {
        if labels.is_empty() {
            return Err(DocsortError::EmptyDataset);
        }

        let mut classes: Vec<String> = labels.to_vec();
        classes.sort();
        classes.dedup();
        if classes.len() < 2 {
            return Err(DocsortError::SingleClass {
                label: classes.remove(0),
            });
        }

        let (n, d) = x.dim();
        let k = classes.len();
        let mut y = Array2::<f64>::zeros((n, k));
        for (i, label) in labels.iter().enumerate() {
            let col = classes
                .binary_search(label)
                .map_err(|_| DocsortError::UnknownClass(label.clone()))?;
            y[[i, col]] = 1.0;
        }

        let alpha = 1.0 / (params.c * n as f64);
        let mut model = Self {
            classes,
            weights: Array2::zeros((k, d)),
            intercept: Array1::zeros(k),
        };

        let mut report = FitReport {
            iterations: 0,
            converged: false,
            final_loss: f64::INFINITY,
        };

        for iter in 0..params.max_iter {
            let mut probs = model.scores_batch(x);
            softmax_rows(&mut probs);

            report.final_loss = model.loss(&probs, &y, alpha);
            report.iterations = iter + 1;

            let diff = (&probs - &y) / n as f64;
            let grad_w = diff.t().dot(x) + &model.weights * alpha;
            let grad_b = diff.sum_axis(Axis(0));

            let largest = grad_w
                .iter()
                .chain(grad_b.iter())
                .fold(0.0_f64, |m, g| m.max(g.abs()));
            if largest < TOLERANCE {
                report.converged = true;
                break;
            }

            model.weights.scaled_add(-LEARNING_RATE, &grad_w);
            model.intercept.scaled_add(-LEARNING_RATE, &grad_b);
        }

        if report.converged {
            debug!(
                iterations = report.iterations,
                loss = report.final_loss,
                "classifier converged"
            );
        } else {
            info!(
                iterations = report.iterations,
                loss = report.final_loss,
                "classifier stopped at iteration bound before converging"
            );
        }
        Ok((model, report))
    }

    fn scores_batch(&self, x: &Array2<f64>) -> Array2<f64> {
        x.dot(&self.weights.t()) + &self.intercept
    }

    fn loss(&self, probs: &Array2<f64>, y: &Array2<f64>, alpha: f64) -> f64 {
        let n = probs.nrows() as f64;
        let cross_entropy: f64 = probs
            .iter()
            .zip(y.iter())
            .filter(|(_, t)| **t > 0.0)
            .map(|(p, _)| -(p.max(f64::MIN_POSITIVE)).ln())
            .sum();
        cross_entropy / n + 0.5 * alpha * self.weights.iter().map(|w| w * w).sum::<f64>()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.weights.ncols()
    }

    pub fn decision_function(&self, x: ArrayView1<f64>) -> Result<Array1<f64>> {
        if x.len() != self.n_features() {
            return Err(DocsortError::DimensionMismatch {
                expected: self.n_features(),
                actual: x.len(),
            });
        }
        Ok(self.weights.dot(&x) + &self.intercept)
    }

    pub fn predict_proba(&self, x: ArrayView1<f64>) -> Result<Array1<f64>> {
        let scores = self.decision_function(x)?;
        let mut probs = scores.insert_axis(Axis(0));
        softmax_rows(&mut probs);
        Ok(probs.index_axis_move(Axis(0), 0))
    }

    /// Highest-scoring class; ties go to the first class in sorted order.
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<&str> {
        let scores = self.decision_function(x)?;
        let mut best = 0;
        for (i, s) in scores.iter().enumerate() {
            if *s > scores[best] {
                best = i;
            }
        }
        Ok(self.classes[best].as_str())
    }
}
