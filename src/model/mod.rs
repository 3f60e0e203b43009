use thiserror::Error;

use crate::models::DerivedFeatures;

pub mod logistic;

/// Class index the classifier uses for "churn".
pub const POSITIVE_CLASS: u8 = 1;

/// A pre-trained binary churn classifier.
///
/// Loaded once at startup and handed to [`crate::assessment::assess`] by reference.
pub trait Classifier {
    /// Predicted class index (`0` = stay, [`POSITIVE_CLASS`] = churn).
    fn predict(&self, features: &DerivedFeatures) -> Result<u8, ModelError>;

    /// `[p_stay, p_churn]`, summing to 1.
    fn predict_proba(&self, features: &DerivedFeatures) -> Result<[f64; 2], ModelError>;
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model was trained on columns {found:?}, expected {expected:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("model field '{field}' has {found} entries, expected {expected}")]
    Shape {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("model scale for '{0}' is zero or not finite")]
    DegenerateScale(String),

    #[error("model produced a non-finite score")]
    NonFinite,
}
