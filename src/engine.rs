use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::core::{Doctor, HealthCheck, NewProfile, PredictionResult, UserProfile};
use crate::directory::{relevant_doctors, DoctorFilter, DEFAULT_RELEVANT_DOCTORS};
use crate::error::{MedPredictError, Result};
use crate::ranking::{self, normalize_symptoms, Ranker, SubstringRanker, DEFAULT_MAX_PREDICTIONS};
use crate::store::{RecordStore, SqliteBackend};
use crate::suggest::{suggest_symptoms, DEFAULT_MAX_SUGGESTIONS};
use crate::trends::{TimeRange, TrendReport, TrendSummary};

/// Main symptom checker orchestrator
pub struct HealthEngine {
    catalog: Arc<Catalog>,
    ranker: Arc<dyn Ranker>,
    store: RecordStore,
    config: EngineConfig,
}

impl HealthEngine {
    /// Create engine with a SQLite store at `config.db_path`
    pub async fn new(config: EngineConfig) -> Result<Self> {
        let backend = Arc::new(SqliteBackend::new(&config.db_path).await?);

        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin(),
        };

        let ranker = Arc::new(SubstringRanker::from_seed(config.seed));

        tracing::info!("Health engine ready ({})", config);

        Ok(Self::with_parts(catalog, ranker, RecordStore::new(backend), config))
    }

    /// Assemble an engine from explicit parts
    pub fn with_parts(
        catalog: Catalog,
        ranker: Arc<dyn Ranker>,
        store: RecordStore,
        config: EngineConfig,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            ranker,
            store,
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Symptom names for a partially typed query
    pub fn suggest(&self, query: &str) -> Vec<String> {
        // `with_parts` takes the config unvalidated
        let limit = self.config.max_suggestions.min(DEFAULT_MAX_SUGGESTIONS);
        suggest_symptoms(&self.catalog.symptoms, query, limit)
    }

    /// Rank symptoms without recording anything
    pub fn predict(&self, symptoms: &[String]) -> Result<Vec<PredictionResult>> {
        ranking::predict(
            self.ranker.as_ref(),
            symptoms,
            &self.catalog.conditions,
            self.config.max_predictions.min(DEFAULT_MAX_PREDICTIONS),
        )
    }

    /// Run an analysis and record it in the history.
    ///
    /// Waits `analysis_delay_ms` first. Dropping the future before it
    /// resolves discards the analysis; nothing is stored.
    pub async fn analyze(&self, symptoms: &[String]) -> Result<HealthCheck> {
        self.analyze_with_notes(symptoms, None).await
    }

    pub async fn analyze_with_notes(&self, symptoms: &[String], notes: Option<String>) -> Result<HealthCheck> {
        let symptoms = normalize_symptoms(symptoms);
        if symptoms.is_empty() {
            return Err(MedPredictError::NoSymptoms);
        }

        let delay = self.config.analysis_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let start = Instant::now();
        let predictions = self.predict(&symptoms)?;

        let mut check = HealthCheck::new(symptoms, predictions);
        check.notes = notes;

        self.store.append_health_check(&check).await?;

        tracing::info!(
            "Recorded health check {} ({} symptoms, top: {}) in {:.2}ms",
            check.id,
            check.symptoms.len(),
            check.top_prediction().map(|p| p.display()).unwrap_or_default(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(check)
    }

    /// Create and store the profile for a new user
    pub async fn onboard(&self, profile: NewProfile) -> Result<UserProfile> {
        let profile = profile.into_profile();
        self.warn_unknown_city(&profile.city);
        self.store.save_profile(&profile).await?;
        tracing::info!("Created profile {}", profile.id);
        Ok(profile)
    }

    /// Overwrite the stored profile
    pub async fn update_profile(&self, profile: &UserProfile) -> Result<()> {
        self.warn_unknown_city(&profile.city);
        self.store.save_profile(profile).await?;
        tracing::info!("Updated profile {}", profile.id);
        Ok(())
    }

    pub async fn profile(&self) -> Result<Option<UserProfile>> {
        self.store.get_profile().await
    }

    /// Recorded checks, newest first
    pub async fn history(&self) -> Result<Vec<HealthCheck>> {
        self.store.get_health_checks().await
    }

    /// Summary of the history inside `range`, relative to now
    pub async fn trends(&self, range: TimeRange) -> Result<TrendSummary> {
        let checks = self.store.get_health_checks().await?;
        Ok(TrendSummary::compute(&checks, range, Utc::now()))
    }

    /// Summary, buckets, common symptoms and risk distribution for `range`
    pub async fn trend_report(&self, range: TimeRange) -> Result<TrendReport> {
        let checks = self.store.get_health_checks().await?;
        Ok(TrendReport::compute(&checks, range, Utc::now()))
    }

    /// Whether the catalog lists `city`
    pub fn knows_city(&self, city: &str) -> bool {
        self.catalog.has_city(city)
    }

    fn warn_unknown_city(&self, city: &str) {
        if !self.catalog.cities.is_empty() && !self.knows_city(city) {
            tracing::warn!("City {:?} is not in the catalog, doctor search may be empty", city);
        }
    }

    pub fn find_doctors(&self, filter: &DoctorFilter) -> Vec<Doctor> {
        filter.apply(&self.catalog.doctors)
    }

    /// Doctors to suggest alongside a prediction
    pub fn doctors_for(&self, prediction: &PredictionResult) -> Vec<&Doctor> {
        relevant_doctors(&self.catalog.doctors, &prediction.specialization, DEFAULT_RELEVANT_DOCTORS)
    }

    /// Forget the profile and the whole history
    pub async fn sign_out(&self) -> Result<()> {
        self.store.clear_all().await?;
        tracing::info!("Cleared local records");
        Ok(())
    }
}
