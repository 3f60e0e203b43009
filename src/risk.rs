use thiserror::Error;

use crate::models::{RiskAssessment, RiskCategory, RiskColor};

#[derive(Debug, Error, PartialEq)]
pub enum RiskError {
    /// The upstream classifier must produce a probability in `[0, 1]`.
    #[error("churn probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
}

/// One row of the bucketing table: probabilities below `upper` (exclusive)
/// fall into this tier unless an earlier row matched.
struct Tier {
    upper: f64,
    category: RiskCategory,
    color: RiskColor,
    description: &'static str,
}

/// Ordered tiers, first match wins. The last row also takes `1.0` itself.
static RISK_TABLE: [Tier; 4] = [
    Tier {
        upper: 0.2,
        category: RiskCategory::Low,
        color: RiskColor::Green,
        description: "This customer has a very low probability of churning. \
                      They are likely to remain loyal to your services.",
    },
    Tier {
        upper: 0.4,
        category: RiskCategory::Average,
        color: RiskColor::Orange,
        description: "This customer has a moderate risk of churning. \
                      Consider implementing retention strategies to improve their satisfaction.",
    },
    Tier {
        upper: 0.6,
        category: RiskCategory::High,
        color: RiskColor::Yellow,
        description: "This customer has a high risk of churning. \
                      Immediate intervention is recommended to prevent customer loss.",
    },
    Tier {
        upper: f64::INFINITY,
        category: RiskCategory::Critical,
        color: RiskColor::Red,
        description: "This customer has a critical risk of churning. \
                      Urgent action is required to retain this customer.",
    },
];

/// Bucket a churn probability into a risk tier.
///
/// Tiers are half-open `[lo, hi)` except the top one, which is closed at 1.0.
/// NaN and values outside `[0, 1]` are rejected, never clamped.
pub fn classify(probability: f64) -> Result<RiskAssessment, RiskError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(RiskError::InvalidProbability(probability));
    }

    let tier = RISK_TABLE
        .iter()
        .find(|t| probability < t.upper)
        .unwrap_or(&RISK_TABLE[RISK_TABLE.len() - 1]);

    Ok(RiskAssessment {
        category: tier.category,
        color: tier.color,
        description: tier.description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(p: f64) -> RiskCategory {
        classify(p).unwrap().category
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(category(0.1999), RiskCategory::Low);
        assert_eq!(category(0.2), RiskCategory::Average);
        assert_eq!(category(0.4), RiskCategory::High);
        assert_eq!(category(0.6), RiskCategory::Critical);
    }

    #[test]
    fn test_closed_endpoints() {
        assert_eq!(category(0.0), RiskCategory::Low);
        assert_eq!(category(1.0), RiskCategory::Critical);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(classify(-0.01), Err(RiskError::InvalidProbability(-0.01)));
        assert_eq!(classify(1.01), Err(RiskError::InvalidProbability(1.01)));
        assert!(classify(f64::NAN).is_err());
        assert!(classify(f64::INFINITY).is_err());
    }

    #[test]
    fn test_tiers_are_monotonic_without_gaps() {
        let mut previous = RiskCategory::Low;
        for i in 0..=10_000 {
            let p = i as f64 / 10_000.0;
            let current = category(p);
            assert!(current >= previous, "tier went down at p={}", p);
            previous = current;
        }
        assert_eq!(previous, RiskCategory::Critical);
    }

    #[test]
    fn test_color_and_description_follow_category() {
        let low = classify(0.05).unwrap();
        assert_eq!(low.color, RiskColor::Green);
        assert!(low.description.starts_with("This customer has a very low probability"));

        let average = classify(0.3).unwrap();
        assert_eq!(average.color, RiskColor::Orange);
        assert!(average.description.contains("retention strategies"));

        let high = classify(0.5).unwrap();
        assert_eq!(high.color, RiskColor::Yellow);
        assert!(high.description.contains("Immediate intervention"));

        let critical = classify(0.95).unwrap();
        assert_eq!(critical.color, RiskColor::Red);
        assert!(critical.description.contains("Urgent action"));
    }
}
