pub mod fallback;
pub mod jitter;
pub mod substring;

use crate::core::{Condition, PredictionResult};
use crate::error::Result;

pub use fallback::or_general_consultation;
pub use jitter::{FixedJitter, JitterSource, UniformJitter};
pub use substring::SubstringRanker;

/// Default number of predictions kept per analysis
pub const DEFAULT_MAX_PREDICTIONS: usize = 3;

/// Trait for symptom-to-condition scoring implementations
pub trait Ranker: Send + Sync {
    /// Score conditions against selected symptoms, return matches sorted by confidence (highest first)
    fn rank(&self, symptoms: &[String], conditions: &[Condition]) -> Result<Vec<RankedCandidate>>;

    /// Get ranker name for logging
    fn name(&self) -> &str;
}

/// Condition that shares at least one symptom with the input
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub prediction: PredictionResult,

    /// Canonical symptoms that matched
    pub matched: Vec<String>,

    /// matched / total canonical symptoms (0.0 - 1.0)
    pub matched_fraction: f64,
}

impl RankedCandidate {
    pub fn new(prediction: PredictionResult, matched: Vec<String>, matched_fraction: f64) -> Self {
        Self {
            prediction,
            matched,
            matched_fraction,
        }
    }
}

/// Trim, drop blanks and remove case-insensitive duplicates (first spelling wins)
pub fn normalize_symptoms<S: AsRef<str>>(symptoms: &[S]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(symptoms.len());
    let mut out = Vec::with_capacity(symptoms.len());

    for symptom in symptoms {
        let trimmed = symptom.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = trimmed.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            out.push(trimmed.to_string());
        }
    }

    out
}

/// Rank, keep the best `max_results` and fall back to a consultation entry when nothing matched
pub fn predict(
    ranker: &dyn Ranker,
    symptoms: &[String],
    conditions: &[Condition],
    max_results: usize,
) -> Result<Vec<PredictionResult>> {
    let symptoms = normalize_symptoms(symptoms);
    let ranked = ranker.rank(&symptoms, conditions)?;

    tracing::debug!(
        "Ranker {} matched {} of {} conditions for {:?}",
        ranker.name(),
        ranked.len(),
        conditions.len(),
        symptoms
    );

    let predictions = ranked
        .into_iter()
        .take(max_results.max(1))
        .map(|candidate| candidate.prediction)
        .collect();

    Ok(or_general_consultation(predictions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_symptoms() {
        let normalized = normalize_symptoms(&["  Fever ", "cough", "FEVER", "", "Cough"]);
        assert_eq!(normalized, strings(&["Fever", "cough"]));
    }

    #[test]
    fn test_predict_truncates_to_three() {
        let ranker = SubstringRanker::new(FixedJitter::zero());
        let catalog = Catalog::builtin();
        // Headache / Nausea / Fever / Cough touch every built-in condition
        let symptoms = strings(&["Headache", "Nausea", "Fever", "Cough"]);

        let predictions = predict(&ranker, &symptoms, &catalog.conditions, 3).unwrap();
        assert_eq!(predictions.len(), 3);
        assert!(predictions.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn test_predict_fallback() {
        let ranker = SubstringRanker::new(FixedJitter::zero());
        let catalog = Catalog::builtin();

        let predictions = predict(&ranker, &strings(&["Hiccups"]), &catalog.conditions, 3).unwrap();
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].confidence, 65);
        assert!(predictions[0].is_general_consultation());
    }
}
