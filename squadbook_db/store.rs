use squadbook_app::repository::KeyValueStore;
use squadbook_types::errors::PersistenceError;

use crate::connection::DbPool;

/// Implements KeyValueStore on a single `kv` table. This is the local
/// backing store for the favorites entry; values are opaque strings and
/// serialization stays with the caller.
#[derive(Clone)]
pub struct SqliteKeyValueStore {
    pool: DbPool,
}

impl SqliteKeyValueStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        sqlx::query(
            "INSERT INTO kv (key, value) VALUES (?, ?)
             ON CONFLICT (key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        sqlx::query("DELETE FROM kv WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::establish_test_connection_pool;

    async fn store() -> SqliteKeyValueStore {
        let pool = establish_test_connection_pool().await.unwrap();
        SqliteKeyValueStore::new(pool)
    }

    #[tokio::test]
    async fn test_get_absent_key_returns_none() {
        let store = store().await;
        assert_eq!(store.get("favoritePlayers").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let store = store().await;

        store.set("favoritePlayers", r#"["1","2"]"#).await.unwrap();
        assert_eq!(
            store.get("favoritePlayers").await.unwrap(),
            Some(r#"["1","2"]"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let store = store().await;

        store.set("favoritePlayers", r#"["1"]"#).await.unwrap();
        store.set("favoritePlayers", r#"["2"]"#).await.unwrap();

        assert_eq!(
            store.get("favoritePlayers").await.unwrap(),
            Some(r#"["2"]"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_deletes_the_key() {
        let store = store().await;

        store.set("favoritePlayers", "[]").await.unwrap();
        store.remove("favoritePlayers").await.unwrap();

        assert_eq!(store.get("favoritePlayers").await.unwrap(), None);
    }
}
