use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a single symptom is on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomSeverity {
    Mild,
    Moderate,
    Severe,
}

/// Risk level attached to a condition (and to predictions derived from it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference symptom offered by the suggestion lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub name: String,

    /// Body system grouping (respiratory, neurological, ...)
    pub category: String,

    pub severity: SymptomSeverity,
}

impl Symptom {
    pub fn new(name: impl Into<String>, category: impl Into<String>, severity: SymptomSeverity) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            severity,
        }
    }
}

/// Static condition record scored by the ranker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Canonical symptom names, compared by bidirectional substring match
    pub symptoms: Vec<String>,

    /// Prevention tips shown with a prediction
    #[serde(default)]
    pub prevention: Vec<String>,

    pub severity: Severity,

    /// Medical specialization used to suggest doctors
    pub specialization: String,
}

impl Condition {
    /// Check whether a user-entered symptom matches one of the canonical ones.
    ///
    /// Either string containing the other (case-insensitive) counts as a match.
    pub fn matches_symptom(canonical: &str, selected: &str) -> bool {
        let canonical = canonical.to_lowercase();
        let selected = selected.to_lowercase();
        selected.contains(&canonical) || canonical.contains(&selected)
    }

    /// Canonical symptoms hit by at least one of `selected`, in declaration order
    pub fn matched_symptoms<'a, S: AsRef<str>>(&'a self, selected: &[S]) -> Vec<&'a str> {
        self.symptoms
            .iter()
            .filter(|canonical| {
                selected
                    .iter()
                    .any(|s| Self::matches_symptom(canonical, s.as_ref()))
            })
            .map(String::as_str)
            .collect()
    }
}
