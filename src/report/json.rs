use anyhow::Result;

use crate::models::PredictionResult;

pub fn render(result: &PredictionResult) -> Result<()> {
    println!("{}", to_string(result)?);
    Ok(())
}

fn to_string(result: &PredictionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::derive;
    use crate::models::{ChurnLabel, RawInputs};
    use crate::risk::classify;

    #[test]
    fn test_json_shape() {
        let result = PredictionResult {
            label: ChurnLabel::Churn,
            churn_probability: 0.65,
            confidence: 0.65,
            risk: classify(0.65).unwrap(),
            features: derive(&RawInputs::default()),
        };
        let value: serde_json::Value = serde_json::from_str(&to_string(&result).unwrap()).unwrap();

        assert_eq!(value["label"], "churn");
        assert_eq!(value["risk"]["category"], "critical");
        assert_eq!(value["risk"]["color"], "red");
        assert_eq!(value["features"]["Total_Trans_Ct"], 45);
        assert_eq!(value["features"]["Avg_Utilization_Ratio"], 0.4);
    }
}
