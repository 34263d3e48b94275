// Featurizer + classifier
pub mod featurizer;
pub mod logistic;
pub mod model;
pub mod stopwords;

pub use featurizer::TfidfVectorizer;
pub use logistic::{FitReport, LogisticRegression, TrainingParams};
pub use model::Model;
