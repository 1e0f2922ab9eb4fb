use async_trait::async_trait;

use crate::error::Result;

/// Durable string storage keyed by name
///
/// Mirrors browser local storage: one opaque value per key, last write wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if it was never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Drop `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}
