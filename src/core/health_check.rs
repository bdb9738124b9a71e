use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{PredictionResult, Severity};

/// One completed analysis: the symptoms entered and what they ranked to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub id: String,

    /// Symptoms in the order the user entered them
    pub symptoms: Vec<String>,

    /// Most confident first, never empty
    pub predictions: Vec<PredictionResult>,

    pub timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HealthCheck {
    /// Record a fresh analysis with a random id and the current time.
    ///
    /// An empty prediction list is replaced by the general consultation entry.
    pub fn new(symptoms: Vec<String>, predictions: Vec<PredictionResult>) -> Self {
        Self::at(symptoms, predictions, Utc::now())
    }

    /// Same as [`HealthCheck::new`] with an explicit timestamp
    pub fn at(symptoms: Vec<String>, mut predictions: Vec<PredictionResult>, timestamp: DateTime<Utc>) -> Self {
        if predictions.is_empty() {
            predictions.push(PredictionResult::general_consultation());
        }

        Self {
            id: Uuid::new_v4().to_string(),
            symptoms,
            predictions,
            timestamp,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Highest-confidence prediction
    pub fn top_prediction(&self) -> Option<&PredictionResult> {
        self.predictions.first()
    }

    /// Whether any prediction carries the given severity
    pub fn has_severity(&self, severity: Severity) -> bool {
        self.predictions.iter().any(|p| p.severity == severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_predictions_fall_back() {
        let check = HealthCheck::new(vec!["Itching".to_string()], Vec::new());
        assert_eq!(check.predictions.len(), 1);
        assert!(check.top_prediction().unwrap().is_general_consultation());
        assert!(check.has_severity(Severity::Medium));
        assert!(!check.has_severity(Severity::High));
    }

    #[test]
    fn test_notes_are_optional_in_json() {
        let check = HealthCheck::new(vec!["Cough".to_string()], Vec::new());
        let json = serde_json::to_value(&check).unwrap();
        assert!(json.get("notes").is_none());

        let noted = check.with_notes("after a run");
        let json = serde_json::to_string(&noted).unwrap();
        let parsed: HealthCheck = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.notes.as_deref(), Some("after a run"));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = HealthCheck::new(vec!["Cough".to_string()], Vec::new());
        let b = HealthCheck::new(vec!["Cough".to_string()], Vec::new());
        assert_ne!(a.id, b.id);
    }
}
