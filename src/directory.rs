use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::core::prediction::GENERAL_PRACTICE;
use crate::core::Doctor;

/// Default number of doctors shown next to a prediction
pub const DEFAULT_RELEVANT_DOCTORS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoctorSort {
    /// Highest rating first
    #[default]
    Rating,
    /// Most years in practice first
    Experience,
    /// Alphabetical
    Name,
}

impl FromStr for DoctorSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rating" => Ok(DoctorSort::Rating),
            "experience" => Ok(DoctorSort::Experience),
            "name" => Ok(DoctorSort::Name),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// Directory filter; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorFilter {
    /// Exact city
    pub city: Option<String>,
    /// Exact specialization
    pub specialization: Option<String>,
    /// Case-insensitive substring of name, hospital or specialization
    pub search: Option<String>,
    #[serde(default)]
    pub sort: DoctorSort,
}

impl DoctorFilter {
    pub fn matches(&self, doctor: &Doctor) -> bool {
        if let Some(city) = non_empty(&self.city) {
            if doctor.city != city {
                return false;
            }
        }

        if let Some(specialization) = non_empty(&self.specialization) {
            if doctor.specialization != specialization {
                return false;
            }
        }

        if let Some(search) = non_empty(&self.search) {
            let needle = search.to_lowercase();
            let hit = [&doctor.name, &doctor.hospital, &doctor.specialization]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        true
    }

    /// Matching doctors in the requested order
    pub fn apply(&self, doctors: &[Doctor]) -> Vec<Doctor> {
        let mut found: Vec<Doctor> = doctors.iter().filter(|d| self.matches(d)).cloned().collect();

        match self.sort {
            DoctorSort::Rating => {
                found.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal))
            }
            DoctorSort::Experience => found.sort_by(|a, b| b.experience.cmp(&a.experience)),
            DoctorSort::Name => found.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        found
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Doctors to suggest for a prediction's specialization.
///
/// General Practice predictions accept any doctor.
pub fn relevant_doctors<'a>(doctors: &'a [Doctor], specialization: &str, limit: usize) -> Vec<&'a Doctor> {
    doctors
        .iter()
        .filter(|d| d.specialization == specialization || specialization == GENERAL_PRACTICE)
        .take(limit)
        .collect()
}
