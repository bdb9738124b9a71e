pub mod memory;
pub mod records;
pub mod sqlite;

use async_trait::async_trait;
use crate::error::Result;

pub use memory::MemoryBackend;
pub use records::{RecordStore, HEALTH_CHECKS_KEY, PROFILE_KEY};
pub use sqlite::SqliteBackend;

/// Trait for raw string key-value storage (the browser `localStorage` contract)
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Get stored value, `None` if the key was never set
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite value for key
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete key, no-op if absent
    async fn remove_item(&self, key: &str) -> Result<()>;

    /// Get backend name for logging
    fn name(&self) -> &str;
}
