use crate::core::{Condition, PredictionResult};
use crate::error::Result;
use crate::ranking::{JitterSource, RankedCandidate, Ranker, UniformJitter};

/// Confidence ceiling for matched conditions
pub const MAX_CONFIDENCE: f64 = 95.0;

/// Bidirectional substring matcher over canonical symptom lists.
///
/// Confidence is `min(95, matched_fraction * 100 + jitter)`, rounded.
pub struct SubstringRanker {
    jitter: Box<dyn JitterSource>,
}

impl SubstringRanker {
    pub fn new(jitter: impl JitterSource + 'static) -> Self {
        Self {
            jitter: Box::new(jitter),
        }
    }

    /// Ranker with entropy-seeded jitter, or reproducible jitter when a seed is given
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(UniformJitter::seeded(seed)),
            None => Self::new(UniformJitter::new()),
        }
    }

    fn confidence(&self, matched_fraction: f64) -> u8 {
        let raw = (matched_fraction * 100.0 + self.jitter.sample()).min(MAX_CONFIDENCE);
        raw.round().clamp(0.0, 100.0) as u8
    }
}

impl Default for SubstringRanker {
    fn default() -> Self {
        Self::new(UniformJitter::new())
    }
}

impl Ranker for SubstringRanker {
    fn rank(&self, symptoms: &[String], conditions: &[Condition]) -> Result<Vec<RankedCandidate>> {
        let mut ranked: Vec<RankedCandidate> = conditions
            .iter()
            .filter(|condition| !condition.symptoms.is_empty())
            .filter_map(|condition| {
                let matched = condition.matched_symptoms(symptoms);
                if matched.is_empty() {
                    return None;
                }

                let matched_fraction = matched.len() as f64 / condition.symptoms.len() as f64;
                let confidence = self.confidence(matched_fraction);

                Some(RankedCandidate::new(
                    PredictionResult::from_condition(condition, confidence),
                    matched.into_iter().map(str::to_string).collect(),
                    matched_fraction,
                ))
            })
            .collect();

        // Stable: equal confidences keep catalog order
        ranked.sort_by(|a, b| b.prediction.confidence.cmp(&a.prediction.confidence));

        Ok(ranked)
    }

    fn name(&self) -> &str {
        "substring"
    }
}
