use serde::{Deserialize, Serialize};

use crate::core::{Condition, Severity};

/// Name of the synthetic result returned when nothing matches
pub const GENERAL_CONSULTATION: &str = "General Consultation Recommended";

/// Confidence reported for the synthetic consultation result
pub const GENERAL_CONSULTATION_CONFIDENCE: u8 = 65;

/// Specialization used by the consultation result and by the doctor lookup
pub const GENERAL_PRACTICE: &str = "General Practice";

/// One ranked condition for a set of symptoms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Condition name
    pub disease: String,

    /// Match strength in percent (0 - 100)
    pub confidence: u8,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub prevention: Vec<String>,

    pub severity: Severity,

    pub specialization: String,
}

impl PredictionResult {
    /// Wrap a condition with a computed confidence
    pub fn from_condition(condition: &Condition, confidence: u8) -> Self {
        Self {
            disease: condition.name.clone(),
            confidence,
            description: condition.description.clone(),
            prevention: condition.prevention.clone(),
            severity: condition.severity,
            specialization: condition.specialization.clone(),
        }
    }

    /// Result emitted when no condition shares a symptom with the input
    pub fn general_consultation() -> Self {
        Self {
            disease: GENERAL_CONSULTATION.to_string(),
            confidence: GENERAL_CONSULTATION_CONFIDENCE,
            description: "Your symptoms require professional medical evaluation".to_string(),
            prevention: vec![
                "Consult with a healthcare provider".to_string(),
                "Monitor symptoms".to_string(),
                "Rest and hydration".to_string(),
            ],
            severity: Severity::Medium,
            specialization: GENERAL_PRACTICE.to_string(),
        }
    }

    pub fn is_general_consultation(&self) -> bool {
        self.disease == GENERAL_CONSULTATION
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!("{} - {}% [{}] ({})", self.disease, self.confidence, self.severity, self.specialization)
    }
}
