//! Static reference data: symptoms, conditions, doctors and cities.
//!
//! [`Catalog::builtin`] ships the fixed dataset the engine ranks against.
//! Alternative datasets can be loaded from JSON with the same shape.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{Condition, Doctor, Severity, Symptom, SymptomSeverity};
use crate::error::Result;

/// Reference tables, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub symptoms: Vec<Symptom>,
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default)]
    pub cities: Vec<String>,
}

impl Catalog {
    /// Built-in dataset
    pub fn builtin() -> Self {
        Self {
            symptoms: builtin_symptoms(),
            conditions: builtin_conditions(),
            doctors: builtin_doctors(),
            cities: BUILTIN_CITIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Parse a catalog from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&raw)?;
        tracing::debug!(
            "Loaded catalog from {}: {} symptoms, {} conditions, {} doctors",
            path.as_ref().display(),
            catalog.symptoms.len(),
            catalog.conditions.len(),
            catalog.doctors.len()
        );
        Ok(catalog)
    }

    /// Find a condition by exact name
    pub fn condition(&self, name: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.name == name)
    }

    /// Whether `city` is one of the listed cities, ignoring case
    pub fn has_city(&self, city: &str) -> bool {
        let city = city.trim();
        self.cities.iter().any(|c| c.eq_ignore_ascii_case(city))
    }

    /// Distinct doctor specializations, first-seen order
    pub fn specializations(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for doctor in &self.doctors {
            if !seen.contains(&doctor.specialization.as_str()) {
                seen.push(&doctor.specialization);
            }
        }
        seen
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_CITIES: [&str; 22] = [
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
    "San Antonio", "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville",
    "Fort Worth", "Columbus", "Charlotte", "San Francisco", "Indianapolis",
    "Seattle", "Denver", "Washington DC", "Boston", "Miami",
];

fn builtin_symptoms() -> Vec<Symptom> {
    use SymptomSeverity::*;

    [
        ("Headache", "neurological", Mild),
        ("Fever", "general", Moderate),
        ("Cough", "respiratory", Mild),
        ("Shortness of breath", "respiratory", Severe),
        ("Chest pain", "cardiovascular", Severe),
        ("Nausea", "gastrointestinal", Mild),
        ("Vomiting", "gastrointestinal", Moderate),
        ("Diarrhea", "gastrointestinal", Moderate),
        ("Fatigue", "general", Mild),
        ("Muscle aches", "musculoskeletal", Mild),
        ("Sore throat", "respiratory", Mild),
        ("Runny nose", "respiratory", Mild),
        ("Sneezing", "respiratory", Mild),
        ("Joint pain", "musculoskeletal", Moderate),
        ("Skin rash", "dermatological", Mild),
        ("Dizziness", "neurological", Moderate),
        ("Loss of appetite", "general", Mild),
        ("Abdominal pain", "gastrointestinal", Moderate),
        ("Back pain", "musculoskeletal", Moderate),
        ("Insomnia", "neurological", Mild),
    ]
    .into_iter()
    .map(|(name, category, severity)| Symptom::new(name, category, severity))
    .collect()
}

fn condition(
    name: &str,
    description: &str,
    symptoms: &[&str],
    prevention: &[&str],
    severity: Severity,
    specialization: &str,
) -> Condition {
    Condition {
        name: name.to_string(),
        description: description.to_string(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        prevention: prevention.iter().map(|s| s.to_string()).collect(),
        severity,
        specialization: specialization.to_string(),
    }
}

fn builtin_conditions() -> Vec<Condition> {
    vec![
        condition(
            "Common Cold",
            "A viral infection of the upper respiratory tract",
            &["Cough", "Runny nose", "Sneezing", "Sore throat", "Mild headache"],
            &[
                "Wash hands frequently",
                "Avoid close contact with sick people",
                "Get adequate rest",
                "Stay hydrated",
            ],
            Severity::Low,
            "General Practice",
        ),
        condition(
            "Influenza",
            "A contagious respiratory illness caused by influenza viruses",
            &["Fever", "Cough", "Muscle aches", "Fatigue", "Headache"],
            &[
                "Get annual flu vaccination",
                "Practice good hygiene",
                "Avoid crowded places during flu season",
                "Maintain healthy lifestyle",
            ],
            Severity::Medium,
            "Internal Medicine",
        ),
        condition(
            "Gastroenteritis",
            "Inflammation of the stomach and intestines",
            &["Nausea", "Vomiting", "Diarrhea", "Abdominal pain", "Fever"],
            &[
                "Practice food safety",
                "Wash hands before eating",
                "Drink clean water",
                "Avoid contaminated food",
            ],
            Severity::Medium,
            "Gastroenterology",
        ),
        condition(
            "Migraine",
            "A neurological condition characterized by severe headaches",
            &["Severe headache", "Nausea", "Sensitivity to light", "Dizziness"],
            &[
                "Identify and avoid triggers",
                "Maintain regular sleep schedule",
                "Manage stress",
                "Stay hydrated",
            ],
            Severity::Medium,
            "Neurology",
        ),
        condition(
            "Hypertension",
            "High blood pressure condition",
            &["Headache", "Dizziness", "Chest pain", "Shortness of breath"],
            &[
                "Maintain healthy diet",
                "Regular exercise",
                "Limit sodium intake",
                "Manage stress",
            ],
            Severity::High,
            "Cardiology",
        ),
    ]
}

fn builtin_doctors() -> Vec<Doctor> {
    [
        ("1", "Dr. Sarah Johnson", "General Practice", "New York", 12, 4.8, "NYC General Hospital", "+1-555-0123", "sarah.johnson@hospital.com"),
        ("2", "Dr. Michael Chen", "Internal Medicine", "New York", 15, 4.9, "Manhattan Medical Center", "+1-555-0124", "michael.chen@medcenter.com"),
        ("3", "Dr. Emily Davis", "Cardiology", "Los Angeles", 18, 4.7, "LA Heart Institute", "+1-555-0125", "emily.davis@heartinst.com"),
        ("4", "Dr. Robert Wilson", "Neurology", "Chicago", 20, 4.9, "Chicago Neurological Center", "+1-555-0126", "robert.wilson@neuroc.com"),
        ("5", "Dr. Lisa Rodriguez", "Gastroenterology", "Miami", 14, 4.6, "Miami Digestive Health", "+1-555-0127", "lisa.rodriguez@digestive.com"),
        ("6", "Dr. James Thompson", "General Practice", "Houston", 10, 4.5, "Houston Community Hospital", "+1-555-0128", "james.thompson@community.com"),
    ]
    .into_iter()
    .map(|(id, name, specialization, city, experience, rating, hospital, phone, email)| Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialization: specialization.to_string(),
        city: city.to_string(),
        experience,
        rating,
        hospital: hospital.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
    })
    .collect()
}
