use crate::models::{DerivedFeatures, RawInputs};

/// Training column names, in the order the classifier expects them.
pub const FEATURE_NAMES: [&str; 9] = [
    "Months_on_book",
    "Total_Relationship_Count",
    "Months_Inactive_12_mon",
    "Contacts_Count_12_mon",
    "Total_Revolving_Bal",
    "Total_Amt_Chng_Q4_Q1",
    "Total_Trans_Ct",
    "Total_Ct_Chng_Q4_Q1",
    "Avg_Utilization_Ratio",
];

/// Fallback for quarter-over-quarter ratios when last quarter is empty.
const NO_CHANGE: f64 = 1.0;
/// Fallback for utilization when there is no credit limit.
const NO_UTILIZATION: f64 = 0.0;

/// Map raw account attributes to the classifier's feature vector.
///
/// Total over its input: a zero (or negative) denominator yields the fixed
/// fallback instead of NaN or infinity.
pub fn derive(raw: &RawInputs) -> DerivedFeatures {
    DerivedFeatures {
        months_on_book: raw.months_on_book,
        total_relationship_count: raw.total_relationship_count,
        months_inactive: raw.months_inactive,
        contacts_count: raw.contacts_count,
        total_revolving_bal: raw.current_balance,
        amt_chng_q4_q1: ratio_or(
            raw.spending_this_quarter,
            raw.spending_last_quarter,
            NO_CHANGE,
        ),
        total_trans_ct: raw.transactions_this_quarter + raw.transactions_last_quarter,
        ct_chng_q4_q1: ratio_or(
            f64::from(raw.transactions_this_quarter),
            f64::from(raw.transactions_last_quarter),
            NO_CHANGE,
        ),
        avg_util_ratio: ratio_or(raw.current_balance, raw.credit_limit, NO_UTILIZATION),
    }
}

fn ratio_or(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        fallback
    }
}

impl DerivedFeatures {
    /// Feature values in [`FEATURE_NAMES`] order.
    pub fn row(&self) -> [f64; 9] {
        [
            f64::from(self.months_on_book),
            f64::from(self.total_relationship_count),
            f64::from(self.months_inactive),
            f64::from(self.contacts_count),
            self.total_revolving_bal,
            self.amt_chng_q4_q1,
            f64::from(self.total_trans_ct),
            self.ct_chng_q4_q1,
            self.avg_util_ratio,
        ]
    }

    /// `(column name, value)` pairs, for reporting.
    pub fn named(&self) -> Vec<(&'static str, f64)> {
        FEATURE_NAMES.iter().copied().zip(self.row()).collect()
    }
}
