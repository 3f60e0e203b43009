use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{Classifier, ModelError, POSITIVE_CLASS};
use crate::features::FEATURE_NAMES;
use crate::models::DerivedFeatures;

/// On-disk form of an exported scaler + logistic-regression pipeline.
#[derive(Debug, Deserialize)]
struct Artifact {
    feature_names: Vec<String>,
    mean: Vec<f64>,
    scale: Vec<f64>,
    coefficients: Vec<f64>,
    intercept: f64,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

/// Standard scaling followed by logistic regression.
#[derive(Debug, Clone)]
pub struct LogisticPipeline {
    mean: [f64; 9],
    scale: [f64; 9],
    coefficients: [f64; 9],
    intercept: f64,
    threshold: f64,
}

impl LogisticPipeline {
    /// Load a JSON artifact from disk.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)?;
        let pipeline = Self::from_json(&content)?;
        debug!(path = %path.display(), threshold = pipeline.threshold, "loaded model");
        Ok(pipeline)
    }

    pub fn from_json(content: &str) -> Result<Self, ModelError> {
        let artifact: Artifact = serde_json::from_str(content)?;

        if artifact.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES) {
            return Err(ModelError::FeatureMismatch {
                expected: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
                found: artifact.feature_names,
            });
        }

        let mean = fixed("mean", artifact.mean)?;
        let scale = fixed("scale", artifact.scale)?;
        let coefficients = fixed("coefficients", artifact.coefficients)?;

        if let Some(i) = scale.iter().position(|s| *s == 0.0 || !s.is_finite()) {
            return Err(ModelError::DegenerateScale(FEATURE_NAMES[i].to_string()));
        }

        Ok(LogisticPipeline {
            mean,
            scale,
            coefficients,
            intercept: artifact.intercept,
            threshold: artifact.threshold,
        })
    }

    fn churn_probability(&self, features: &DerivedFeatures) -> Result<f64, ModelError> {
        let z = features
            .row()
            .iter()
            .enumerate()
            .map(|(i, x)| self.coefficients[i] * (x - self.mean[i]) / self.scale[i])
            .sum::<f64>()
            + self.intercept;

        let p = 1.0 / (1.0 + (-z).exp());
        if p.is_finite() {
            Ok(p)
        } else {
            Err(ModelError::NonFinite)
        }
    }
}

fn fixed(field: &'static str, values: Vec<f64>) -> Result<[f64; 9], ModelError> {
    let found = values.len();
    values.try_into().map_err(|_| ModelError::Shape {
        field,
        expected: FEATURE_NAMES.len(),
        found,
    })
}

impl Classifier for LogisticPipeline {
    fn predict(&self, features: &DerivedFeatures) -> Result<u8, ModelError> {
        let p = self.churn_probability(features)?;
        Ok(if p >= self.threshold { POSITIVE_CLASS } else { 0 })
    }

    fn predict_proba(&self, features: &DerivedFeatures) -> Result<[f64; 2], ModelError> {
        let p = self.churn_probability(features)?;
        Ok([1.0 - p, p])
    }
}
