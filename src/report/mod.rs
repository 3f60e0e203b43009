//! Report renderers for a churn assessment.
//!
//! - [`terminal`]: colored risk box with the recommendation; respects `--verbose` / `--quiet`.
//! - [`json`]: the full [`PredictionResult`](crate::models::PredictionResult) as pretty JSON.

pub mod json;
pub mod terminal;
