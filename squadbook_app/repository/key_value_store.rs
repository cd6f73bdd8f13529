use squadbook_types::errors::PersistenceError;

/// The local persistent store backing the favorites set. Plain string
/// key-value semantics; callers own serialization.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Removes `key` if present.
    async fn remove(&self, key: &str) -> Result<(), PersistenceError>;
}
