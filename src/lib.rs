//! # MedPredict Engine
//!
//! Symptom checker core with:
//! - Bidirectional substring ranking of conditions, with injectable jitter
//! - Symptom name suggestions
//! - Local profile and health-check history (SQLite or in-memory)
//! - History trends and a mock doctor directory
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use medpredict_engine::{EngineConfig, HealthEngine};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = HealthEngine::new(EngineConfig::default()).await?;
//!
//!     let check = engine
//!         .analyze(&["fever".to_string(), "cough".to_string()])
//!         .await?;
//!
//!     for prediction in &check.predictions {
//!         println!("{} - {}%", prediction.disease, prediction.confidence);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod directory;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod store;
pub mod suggest;
pub mod trends;

// Re-export primary types
pub use catalog::Catalog;
pub use config::EngineConfig;
pub use crate::core::{Condition, Doctor, Gender, HealthCheck, NewProfile, PredictionResult, Severity, Symptom, UserProfile};
pub use directory::{DoctorFilter, DoctorSort};
pub use engine::HealthEngine;
pub use error::{MedPredictError, Result};
pub use ranking::{FixedJitter, Ranker, SubstringRanker, UniformJitter};
pub use store::{MemoryBackend, RecordStore, SqliteBackend, StorageBackend};
pub use trends::{TimeRange, TrendReport, TrendSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
