use anyhow::Result;
use tracing::debug;

use crate::features::derive;
use crate::model::{Classifier, POSITIVE_CLASS};
use crate::models::{ChurnLabel, PredictionResult, RawInputs};
use crate::risk::classify;

/// Score one customer: derive features, query the classifier, bucket the risk.
///
/// Classifier failures and out-of-range probabilities are returned as-is.
pub fn assess(classifier: &dyn Classifier, raw: &RawInputs) -> Result<PredictionResult> {
    let features = derive(raw);

    let class = classifier.predict(&features)?;
    let [_, churn_probability] = classifier.predict_proba(&features)?;

    let label = if class == POSITIVE_CLASS {
        ChurnLabel::Churn
    } else {
        ChurnLabel::Stay
    };
    let confidence = match label {
        ChurnLabel::Churn => churn_probability,
        ChurnLabel::Stay => 1.0 - churn_probability,
    };

    let risk = classify(churn_probability)?;
    debug!(%label, churn_probability, category = %risk.category, "assessed customer");

    Ok(PredictionResult {
        label,
        churn_probability,
        confidence,
        risk,
        features,
    })
}
