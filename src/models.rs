use serde::{Deserialize, Serialize};

/// Raw account attributes as entered for one customer.
///
/// Field defaults match the starting values of the original entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInputs {
    pub months_on_book: u32,
    pub total_relationship_count: u32,
    pub months_inactive: u32,
    pub contacts_count: u32,
    pub credit_limit: f64,
    pub current_balance: f64,
    pub spending_this_quarter: f64,
    pub spending_last_quarter: f64,
    pub transactions_this_quarter: u32,
    pub transactions_last_quarter: u32,
}

impl Default for RawInputs {
    fn default() -> Self {
        RawInputs {
            months_on_book: 36,
            total_relationship_count: 4,
            months_inactive: 3,
            contacts_count: 2,
            credit_limit: 10_000.0,
            current_balance: 4_000.0,
            spending_this_quarter: 2_000.0,
            spending_last_quarter: 1_500.0,
            transactions_this_quarter: 25,
            transactions_last_quarter: 20,
        }
    }
}

/// Feature vector in the exact shape the classifier was trained on.
///
/// Serializes with the training column names; see [`crate::features::FEATURE_NAMES`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedFeatures {
    #[serde(rename = "Months_on_book")]
    pub months_on_book: u32,
    #[serde(rename = "Total_Relationship_Count")]
    pub total_relationship_count: u32,
    #[serde(rename = "Months_Inactive_12_mon")]
    pub months_inactive: u32,
    #[serde(rename = "Contacts_Count_12_mon")]
    pub contacts_count: u32,
    #[serde(rename = "Total_Revolving_Bal")]
    pub total_revolving_bal: f64,
    #[serde(rename = "Total_Amt_Chng_Q4_Q1")]
    pub amt_chng_q4_q1: f64,
    #[serde(rename = "Total_Trans_Ct")]
    pub total_trans_ct: u32,
    #[serde(rename = "Total_Ct_Chng_Q4_Q1")]
    pub ct_chng_q4_q1: f64,
    #[serde(rename = "Avg_Utilization_Ratio")]
    pub avg_util_ratio: f64,
}

/// Binary decision of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChurnLabel {
    Stay,
    Churn,
}

impl std::fmt::Display for ChurnLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChurnLabel::Stay => write!(f, "stay"),
            ChurnLabel::Churn => write!(f, "churn"),
        }
    }
}

/// Risk tiers, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,
    Average,
    High,
    Critical,
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskCategory::Low => write!(f, "Low Risk"),
            RiskCategory::Average => write!(f, "Average Risk"),
            RiskCategory::High => write!(f, "High Risk"),
            RiskCategory::Critical => write!(f, "Critical Risk"),
        }
    }
}

/// Color tag attached to each risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    Green,
    Orange,
    Yellow,
    Red,
}

impl std::fmt::Display for RiskColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskColor::Green => write!(f, "green"),
            RiskColor::Orange => write!(f, "orange"),
            RiskColor::Yellow => write!(f, "yellow"),
            RiskColor::Red => write!(f, "red"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub category: RiskCategory,
    pub color: RiskColor,
    pub description: &'static str,
}

/// Everything produced by one assessment of one customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub label: ChurnLabel,
    pub churn_probability: f64,
    /// `churn_probability` for churn, `1 - churn_probability` for stay.
    pub confidence: f64,
    pub risk: RiskAssessment,
    pub features: DerivedFeatures,
}
