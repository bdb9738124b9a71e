//! Aggregates over the health-check history.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::core::{HealthCheck, Severity};

/// Default number of entries in [`common_symptoms`]
pub const DEFAULT_COMMON_SYMPTOMS: usize = 8;

/// Look-back window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    Year,
}

impl TimeRange {
    /// First instant inside the window ending at `now`
    pub fn start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            TimeRange::Week => now - Duration::days(7),
            TimeRange::Month => now.checked_sub_months(Months::new(1)).unwrap_or(now - Duration::days(30)),
            TimeRange::Year => now.checked_sub_months(Months::new(12)).unwrap_or(now - Duration::days(365)),
        }
    }

    /// Bucket label for a timestamp: weekday, day of month, or month
    pub fn bucket_label(&self, timestamp: DateTime<Utc>) -> String {
        match self {
            TimeRange::Week => timestamp.format("%a").to_string(),
            TimeRange::Month => timestamp.format("%b %-d").to_string(),
            TimeRange::Year => timestamp.format("%b %Y").to_string(),
        }
    }

    fn bucket_key(&self, timestamp: DateTime<Utc>) -> NaiveDate {
        let date = timestamp.date_naive();
        match self {
            TimeRange::Week | TimeRange::Month => date,
            TimeRange::Year => date.with_day0(0).unwrap_or(date),
        }
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            other => Err(format!("Unknown time range: {}", other)),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        };
        f.write_str(s)
    }
}

/// Checks whose timestamp falls inside the window, input order kept
pub fn checks_in_range(checks: &[HealthCheck], range: TimeRange, now: DateTime<Utc>) -> Vec<HealthCheck> {
    let start = range.start(now);
    checks
        .iter()
        .filter(|check| check.timestamp >= start)
        .cloned()
        .collect()
}

/// Headline numbers for a window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub range: TimeRange,
    pub total_checks: usize,

    /// Mean symptoms per check, rounded
    pub avg_symptoms: u32,

    /// Checks with at least one high-severity prediction
    pub high_risk_checks: usize,

    /// high_risk_checks / total_checks in percent, rounded
    pub high_risk_percentage: u32,

    /// Days since the newest check in the window
    pub days_since_last: Option<i64>,

    /// Whether any symptom name appears twice across the window's checks,
    /// counting repeats inside a single check
    pub repeated_symptoms: bool,
}

impl TrendSummary {
    /// Summarize the checks inside `range`; `checks` are newest first
    pub fn compute(checks: &[HealthCheck], range: TimeRange, now: DateTime<Utc>) -> Self {
        let in_range = checks_in_range(checks, range, now);
        let total_checks = in_range.len();

        let avg_symptoms = if total_checks > 0 {
            let symptoms: usize = in_range.iter().map(|c| c.symptoms.len()).sum();
            (symptoms as f64 / total_checks as f64).round() as u32
        } else {
            0
        };

        let high_risk_checks = in_range.iter().filter(|c| c.has_severity(Severity::High)).count();

        let high_risk_percentage = if total_checks > 0 {
            (high_risk_checks as f64 / total_checks as f64 * 100.0).round() as u32
        } else {
            0
        };

        let days_since_last = in_range
            .iter()
            .map(|c| c.timestamp)
            .max()
            .map(|newest| ((now - newest).num_seconds() as f64 / 86_400.0).round() as i64);

        let mut seen: Vec<&str> = Vec::new();
        let repeated_symptoms = in_range
            .iter()
            .flat_map(|c| c.symptoms.iter())
            .any(|symptom| {
                if seen.contains(&symptom.as_str()) {
                    true
                } else {
                    seen.push(symptom);
                    false
                }
            });

        Self {
            range,
            total_checks,
            avg_symptoms,
            high_risk_checks,
            high_risk_percentage,
            days_since_last,
            repeated_symptoms,
        }
    }
}

/// Everything the trends view shows for one window
#[derive(Debug, Clone, PartialEq)]
pub struct TrendReport {
    pub summary: TrendSummary,

    /// Checks per bucket inside the window, oldest first
    pub checks_over_time: Vec<(String, usize)>,

    pub common_symptoms: Vec<(String, usize)>,

    /// Prediction counts per severity inside the window
    pub risk_distribution: HashMap<Severity, usize>,
}

impl TrendReport {
    pub fn compute(checks: &[HealthCheck], range: TimeRange, now: DateTime<Utc>) -> Self {
        let in_range = checks_in_range(checks, range, now);

        Self {
            summary: TrendSummary::compute(checks, range, now),
            checks_over_time: checks_over_time(&in_range, range),
            common_symptoms: common_symptoms(&in_range, DEFAULT_COMMON_SYMPTOMS),
            risk_distribution: risk_distribution(&in_range),
        }
    }
}

/// Number of checks per bucket, oldest bucket first
pub fn checks_over_time(checks: &[HealthCheck], range: TimeRange) -> Vec<(String, usize)> {
    let mut buckets: Vec<(NaiveDate, String, usize)> = Vec::new();

    for check in checks {
        let key = range.bucket_key(check.timestamp);
        match buckets.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, _, count)) => *count += 1,
            None => buckets.push((key, range.bucket_label(check.timestamp), 1)),
        }
    }

    buckets.sort_by_key(|(key, _, _)| *key);
    buckets.into_iter().map(|(_, label, count)| (label, count)).collect()
}

/// Most frequent symptoms, descending; ties keep first-seen order
pub fn common_symptoms(checks: &[HealthCheck], limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for symptom in checks.iter().flat_map(|c| c.symptoms.iter()) {
        match counts.iter_mut().find(|(name, _)| name == symptom) {
            Some((_, count)) => *count += 1,
            None => counts.push((symptom.clone(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

/// Prediction counts per severity across all checks
pub fn risk_distribution(checks: &[HealthCheck]) -> HashMap<Severity, usize> {
    let mut counts: HashMap<Severity, usize> = Severity::ALL.iter().map(|s| (*s, 0)).collect();

    for prediction in checks.iter().flat_map(|c| c.predictions.iter()) {
        *counts.entry(prediction.severity).or_insert(0) += 1;
    }

    counts
}

/// Number of checks that carry at least one prediction of each severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeverityBreakdown {
    pub total: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl SeverityBreakdown {
    pub fn of(checks: &[HealthCheck]) -> Self {
        let count = |severity: Severity| checks.iter().filter(|c| c.has_severity(severity)).count();

        Self {
            total: checks.len(),
            low: count(Severity::Low),
            medium: count(Severity::Medium),
            high: count(Severity::High),
        }
    }
}
