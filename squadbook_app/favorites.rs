use std::sync::Arc;

use squadbook_types::errors::PersistenceError;
use squadbook_types::favorites::FavoriteIds;
use squadbook_types::player::Player;

use crate::repository::KeyValueStore;

/// Owns the locally persisted favorite-id set and keeps it consistent with
/// the remote player collection.
///
/// The manager never fetches remotely itself: callers hand in the already
/// fetched player snapshot, so reconciliation stays a pure function of
/// (persisted ids, remote snapshot). Storage failures are absorbed here and
/// logged; they never cross this boundary.
pub struct FavoritesManager {
    key: String,
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesManager {
    pub fn new(key: impl Into<String>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            key: key.into(),
            store,
        }
    }

    /// Loads the persisted favorite ids.
    ///
    /// An absent key, a read failure, or a value that does not parse as a
    /// JSON array of strings all yield the empty set. Empty-string ids found
    /// in storage are dropped and never retained.
    pub async fn load(&self) -> FavoriteIds {
        let stored = match self.store.get(&self.key).await {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!("Could not read favorites under '{}': {err}", self.key);
                return FavoriteIds::new();
            }
        };

        match stored {
            None => FavoriteIds::new(),
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => FavoriteIds::from_raw(ids),
                Err(err) => {
                    tracing::warn!("Malformed favorites under '{}', resetting: {err}", self.key);
                    FavoriteIds::new()
                }
            },
        }
    }

    /// Persists `ids` under the configured key.
    ///
    /// A write failure is non-fatal: the caller keeps the in-memory set as
    /// the session's source of truth and decides whether to warn.
    pub async fn save(&self, ids: &FavoriteIds) -> Result<(), PersistenceError> {
        let serialized = serde_json::to_string(ids)
            .map_err(|err| PersistenceError::Backend(err.to_string()))?;
        self.store.set(&self.key, &serialized).await
    }

    /// Toggles membership of `id` and reconciles against `known_players`.
    ///
    /// Removal if present, append otherwise, then pruning of every id no
    /// longer in `known_players` — in that order, so toggling an id that has
    /// disappeared from the remote collection is a net no-op. Pure; callers
    /// persist the result via [`save`](Self::save).
    pub fn toggle(&self, id: &str, current: &FavoriteIds, known_players: &[Player]) -> FavoriteIds {
        let mut next = current.clone();
        if next.contains(id) {
            next.remove(id);
        } else {
            next.insert(id);
        }

        next.retain(|fav| known_players.iter().any(|p| p.id == fav));
        next
    }

    /// Toggles, persists, and returns the new set.
    ///
    /// A failed write is logged and absorbed: the returned set reflects the
    /// toggle for the current session even if it will not survive a restart.
    pub async fn toggle_and_save(
        &self,
        id: &str,
        current: &FavoriteIds,
        known_players: &[Player],
    ) -> FavoriteIds {
        let next = self.toggle(id, current, known_players);

        if let Err(err) = self.save(&next).await {
            tracing::warn!("Could not persist favorites under '{}': {err}", self.key);
        }

        next
    }

    /// Materializes the favorite players from an already fetched snapshot.
    ///
    /// Returns the subsequence of `all_players` whose id is in `ids`,
    /// preserving the order of `all_players`. Ids missing from the snapshot
    /// are silently omitted.
    pub fn resolve_favorite_details(
        &self,
        ids: &FavoriteIds,
        all_players: &[Player],
    ) -> Vec<Player> {
        all_players
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::tests::{MockKeyValueStore, player_factory};

    const KEY: &str = "favoritePlayers";

    fn manager_with_store() -> (FavoritesManager, Arc<MockKeyValueStore>) {
        let store = Arc::new(MockKeyValueStore::new());
        let manager = FavoritesManager::new(KEY, store.clone());
        (manager, store)
    }

    fn squad() -> Vec<Player> {
        vec![player_factory("1", "Iker"), player_factory("2", "Sergio")]
    }

    #[test]
    fn test_resolve_returns_only_listed_players_in_snapshot_order() {
        let (manager, _) = manager_with_store();
        let players = squad();
        let ids = FavoriteIds::from_raw(vec!["2".to_string(), "1".to_string(), "9".to_string()]);

        let details = manager.resolve_favorite_details(&ids, &players);

        // Snapshot order wins over favorites insertion order, and the stale
        // id "9" is omitted without error.
        let names: Vec<_> = details.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(names, vec!["1", "2"]);
        assert!(details.len() <= players.len());
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let (manager, _) = manager_with_store();
        let players = squad();
        let ids = FavoriteIds::from_raw(vec!["2".to_string()]);

        let once = manager.toggle("1", &ids, &players);
        let twice = manager.toggle("1", &once, &players);

        assert!(once.contains("1"));
        assert!(!twice.contains("1"));
        assert!(twice.contains("2"));
        assert_eq!(twice.len(), ids.len());
    }

    #[test]
    fn test_toggle_prunes_stale_ids_on_every_mutation() {
        let (manager, _) = manager_with_store();
        let players = squad();
        // "7" refers to a player no longer in the remote collection.
        let ids = FavoriteIds::from_raw(vec!["1".to_string(), "7".to_string()]);

        let next = manager.toggle("2", &ids, &players);

        assert!(next.contains("1"));
        assert!(next.contains("2"));
        assert!(!next.contains("7"));
    }

    #[test]
    fn test_toggle_of_vanished_player_is_net_noop() {
        let (manager, _) = manager_with_store();
        let players = squad();

        // Scenario from the favorites flow: empty set, favorite "1", then
        // toggle "3" which is not in the snapshot. The append happens before
        // the prune, so "3" is added and immediately dropped.
        let ids = manager.toggle("1", &FavoriteIds::new(), &players);
        assert_eq!(ids.iter().collect::<Vec<_>>(), vec!["1"]);

        let next = manager.toggle("3", &ids, &players);
        assert_eq!(next.iter().collect::<Vec<_>>(), vec!["1"]);
    }

    #[test]
    fn test_toggle_never_stores_empty_id() {
        let (manager, _) = manager_with_store();
        let players = squad();

        let next = manager.toggle("", &FavoriteIds::new(), &players);
        assert!(next.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let (manager, _) = manager_with_store();
        let ids = FavoriteIds::from_raw(vec!["1".to_string(), "2".to_string()]);

        manager.save(&ids).await.unwrap();
        assert_eq!(manager.load().await, ids);

        let empty = FavoriteIds::new();
        manager.save(&empty).await.unwrap();
        assert_eq!(manager.load().await, empty);
    }

    #[tokio::test]
    async fn test_load_absent_key_yields_empty_set() {
        let (manager, _) = manager_with_store();
        assert!(manager.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_malformed_value_yields_empty_set() {
        let (manager, store) = manager_with_store();
        store.set(KEY, "definitely-not-json").await.unwrap();

        assert!(manager.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_drops_empty_ids_from_storage() {
        let (manager, store) = manager_with_store();
        store.set(KEY, r#"["1","","1","2"]"#).await.unwrap();

        let ids = manager.load().await;
        assert_eq!(ids.iter().collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_toggle_and_save_survives_write_failure() {
        let (manager, store) = manager_with_store();
        let players = squad();
        store.fail_writes(true);

        let next = manager.toggle_and_save("1", &FavoriteIds::new(), &players).await;

        // In-memory set reflects the toggle even though nothing was written.
        assert!(next.contains("1"));
        assert!(manager.load().await.is_empty());
    }
}
