#[cfg(any(test, feature = "test-utils"))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::HashMap,
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, Ordering},
        },
    };

    use squadbook_types::errors::{ApplicationError, PersistenceError, TransportError};
    use squadbook_types::player::{Player, PlayerData};

    use crate::repository::{KeyValueStore, PlayerSource};

    pub fn player_factory(id: &str, name: &str) -> Player {
        Player {
            id: id.to_string(),
            player_name: name.to_string(),
            birth_year: 1990,
            minutes_played: 900,
            position: "Midfielder".to_string(),
            is_captain: false,
            image: format!("https://example.com/{id}.png"),
            team: "Test FC".to_string(),
            passing_accuracy: 0.8,
        }
    }

    /// In-memory stand-in for the local key-value store. Writes can be made
    /// to fail to exercise the absorb-and-log paths.
    #[derive(Default)]
    pub struct MockKeyValueStore {
        values: Mutex<HashMap<String, String>>,
        fail_writes: AtomicBool,
    }

    impl MockKeyValueStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl KeyValueStore for MockKeyValueStore {
        async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(PersistenceError::Backend("write refused".to_string()));
            }
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<(), PersistenceError> {
            self.values.lock().unwrap().remove(key);
            Ok(())
        }
    }

    /// Serves a fixed snapshot instead of hitting the network.
    #[derive(Default, Clone)]
    pub struct MockPlayerSource {
        players: Arc<Mutex<Vec<Player>>>,
    }

    impl MockPlayerSource {
        pub fn with_players(players: Vec<Player>) -> Self {
            Self {
                players: Arc::new(Mutex::new(players)),
            }
        }

        pub fn set_players(&self, players: Vec<Player>) {
            *self.players.lock().unwrap() = players;
        }
    }

    #[async_trait]
    impl PlayerSource for MockPlayerSource {
        async fn list(&self) -> Result<Vec<Player>, ApplicationError> {
            Ok(self.players.lock().unwrap().clone())
        }

        async fn get_by_id(&self, id: &str) -> Result<Player, ApplicationError> {
            let players = self.players.lock().unwrap();
            players
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| {
                    // The real remote answers a missing id with a generic
                    // error status.
                    TransportError::Decode(format!("no player with id {id}")).into()
                })
        }

        async fn create(&self, data: &PlayerData) -> Result<Player, ApplicationError> {
            let mut players = self.players.lock().unwrap();
            let id = (players.len() + 1).to_string();
            let player = Player {
                id,
                player_name: data.player_name.clone(),
                birth_year: data.birth_year,
                minutes_played: data.minutes_played,
                position: data.position.clone(),
                is_captain: data.is_captain,
                image: data.image.clone(),
                team: data.team.clone(),
                passing_accuracy: data.passing_accuracy,
            };
            players.push(player.clone());
            Ok(player)
        }

        async fn update(&self, id: &str, data: &PlayerData) -> Result<Player, ApplicationError> {
            let mut players = self.players.lock().unwrap();
            let player = players
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| TransportError::Decode(format!("no player with id {id}")))?;

            player.player_name = data.player_name.clone();
            player.birth_year = data.birth_year;
            player.minutes_played = data.minutes_played;
            player.position = data.position.clone();
            player.is_captain = data.is_captain;
            player.image = data.image.clone();
            player.team = data.team.clone();
            player.passing_accuracy = data.passing_accuracy;

            Ok(player.clone())
        }

        async fn remove(&self, id: &str) -> Result<(), ApplicationError> {
            self.players.lock().unwrap().retain(|p| p.id != id);
            Ok(())
        }
    }
}
