use crate::core::PredictionResult;

/// Replace an empty ranking with the general consultation entry
pub fn or_general_consultation(predictions: Vec<PredictionResult>) -> Vec<PredictionResult> {
    if predictions.is_empty() {
        tracing::debug!("No condition matched, recommending a general consultation");
        vec![PredictionResult::general_consultation()]
    } else {
        predictions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Condition, Severity};

    #[test]
    fn test_empty_becomes_consultation() {
        let predictions = or_general_consultation(Vec::new());
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].disease, "General Consultation Recommended");
        assert_eq!(predictions[0].confidence, 65);
    }

    #[test]
    fn test_non_empty_untouched() {
        let condition = Condition {
            name: "Influenza".to_string(),
            description: String::new(),
            symptoms: vec!["Fever".to_string()],
            prevention: Vec::new(),
            severity: Severity::Medium,
            specialization: "Internal Medicine".to_string(),
        };
        let predictions = vec![PredictionResult::from_condition(&condition, 40)];

        let result = or_general_consultation(predictions.clone());
        assert_eq!(result, predictions);
    }
}
