pub mod condition;
pub mod doctor;
pub mod health_check;
pub mod prediction;
pub mod profile;

pub use condition::{Condition, Severity, Symptom, SymptomSeverity};
pub use doctor::Doctor;
pub use health_check::HealthCheck;
pub use prediction::PredictionResult;
pub use profile::{Gender, NewProfile, UserProfile};
