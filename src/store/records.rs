//! Typed records on top of a [`StorageBackend`].
//!
//! Two fixed keys, each holding a JSON document:
//! - `medapp_user`: the profile object
//! - `medapp_health_checks`: array of health checks, newest first
//!
//! Stored values that no longer decode into the expected shape are treated
//! as absent and logged, so legacy or hand-edited data never aborts a read.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::core::{HealthCheck, UserProfile};
use crate::error::Result;
use crate::store::StorageBackend;

pub const PROFILE_KEY: &str = "medapp_user";
pub const HEALTH_CHECKS_KEY: &str = "medapp_health_checks";

/// Profile and history persistence, injected wherever records are needed
#[derive(Clone)]
pub struct RecordStore {
    backend: Arc<dyn StorageBackend>,
}

impl RecordStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Overwrite the profile record
    pub async fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string(profile)?;
        self.backend.set_item(PROFILE_KEY, &json).await
    }

    /// Stored profile, `None` if never set or unreadable
    pub async fn get_profile(&self) -> Result<Option<UserProfile>> {
        self.read_json(PROFILE_KEY).await
    }

    /// Prepend a check to the history.
    ///
    /// Read-modify-write without a transaction: two writers racing on the
    /// same backend can lose one of the appends.
    pub async fn append_health_check(&self, check: &HealthCheck) -> Result<()> {
        let mut checks = self.get_health_checks().await?;
        checks.insert(0, check.clone());

        let json = serde_json::to_string(&checks)?;
        self.backend.set_item(HEALTH_CHECKS_KEY, &json).await?;

        tracing::debug!("History now holds {} checks", checks.len());
        Ok(())
    }

    /// Full history, newest first; empty if absent or unreadable
    pub async fn get_health_checks(&self) -> Result<Vec<HealthCheck>> {
        Ok(self.read_json(HEALTH_CHECKS_KEY).await?.unwrap_or_default())
    }

    /// Delete both records
    pub async fn clear_all(&self) -> Result<()> {
        self.backend.remove_item(PROFILE_KEY).await?;
        self.backend.remove_item(HEALTH_CHECKS_KEY).await?;
        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.backend.get_item(key).await? else {
            return Ok(None);
        };

        if raw.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Ignoring malformed {} record in {} store: {}", key, self.backend.name(), e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Gender, PredictionResult};
    use crate::store::{MemoryBackend, SqliteBackend};

    fn profile() -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            name: "Sam Lee".to_string(),
            email: "sam@example.com".to_string(),
            city: "Denver".to_string(),
            age: 41,
            gender: Gender::Other,
        }
    }

    fn check(symptom: &str) -> HealthCheck {
        HealthCheck::new(vec![symptom.to_string()], vec![PredictionResult::general_consultation()])
    }

    fn memory_store() -> (Arc<MemoryBackend>, RecordStore) {
        let backend = Arc::new(MemoryBackend::new());
        let store = RecordStore::new(backend.clone());
        (backend, store)
    }

    #[tokio::test]
    async fn test_profile_round_trip() {
        let (_, store) = memory_store();
        assert!(store.get_profile().await.unwrap().is_none());

        store.save_profile(&profile()).await.unwrap();
        assert_eq!(store.get_profile().await.unwrap(), Some(profile()));
    }

    #[tokio::test]
    async fn test_profile_overwrite() {
        let (_, store) = memory_store();
        store.save_profile(&profile()).await.unwrap();

        let mut updated = profile();
        updated.city = "Austin".to_string();
        store.save_profile(&updated).await.unwrap();

        assert_eq!(store.get_profile().await.unwrap().unwrap().city, "Austin");
    }

    #[tokio::test]
    async fn test_append_is_newest_first() {
        let (_, store) = memory_store();
        let c1 = check("Cough");
        let c2 = check("Fever");

        store.append_health_check(&c1).await.unwrap();
        store.append_health_check(&c2).await.unwrap();

        assert_eq!(store.get_health_checks().await.unwrap(), vec![c2, c1]);
    }

    #[tokio::test]
    async fn test_clear_all_twice() {
        let (backend, store) = memory_store();
        store.save_profile(&profile()).await.unwrap();
        store.append_health_check(&check("Cough")).await.unwrap();

        store.clear_all().await.unwrap();
        store.clear_all().await.unwrap();

        assert!(backend.is_empty());
        assert!(store.get_profile().await.unwrap().is_none());
        assert!(store.get_health_checks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_profile_is_absent() {
        let (backend, store) = memory_store();
        backend.set_item(PROFILE_KEY, "{not json").await.unwrap();
        assert!(store.get_profile().await.unwrap().is_none());

        backend.set_item(PROFILE_KEY, "{\"id\": 3}").await.unwrap();
        assert!(store.get_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_history_is_empty_and_recoverable() {
        let (backend, store) = memory_store();
        backend.set_item(HEALTH_CHECKS_KEY, "{\"legacy\": true}").await.unwrap();
        assert!(store.get_health_checks().await.unwrap().is_empty());

        // Appending replaces the unreadable list
        let c1 = check("Cough");
        store.append_health_check(&c1).await.unwrap();
        assert_eq!(store.get_health_checks().await.unwrap(), vec![c1]);
    }

    #[tokio::test]
    async fn test_persisted_layout() {
        let (backend, store) = memory_store();
        let c1 = check("Cough");
        store.append_health_check(&c1).await.unwrap();

        let raw = backend.get_item(HEALTH_CHECKS_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["symptoms"][0], "Cough");
        assert_eq!(value[0]["predictions"][0]["confidence"], 65);
    }

    #[tokio::test]
    async fn test_sqlite_backend() {
        let backend = Arc::new(SqliteBackend::new(":memory:").await.unwrap());
        let store = RecordStore::new(backend);

        store.save_profile(&profile()).await.unwrap();
        store.append_health_check(&check("Cough")).await.unwrap();

        assert_eq!(store.backend_name(), "sqlite");
        assert_eq!(store.get_profile().await.unwrap(), Some(profile()));
        assert_eq!(store.get_health_checks().await.unwrap().len(), 1);
    }
}
