use squadbook_types::errors::ApplicationError;
use squadbook_types::player::{Player, PlayerData};

/// The remote player collection. Stateless; every call hits the remote
/// resource and fails transparently to the caller as a transport error.
#[async_trait::async_trait]
pub trait PlayerSource: Send + Sync {
    /// Returns all players currently in the remote collection.
    async fn list(&self) -> Result<Vec<Player>, ApplicationError>;

    /// Returns a player by id. A missing id surfaces as a transport error,
    /// not a distinct not-found kind.
    async fn get_by_id(&self, id: &str) -> Result<Player, ApplicationError>;

    /// Creates a player; the remote collection assigns the id.
    async fn create(&self, data: &PlayerData) -> Result<Player, ApplicationError>;

    /// Updates a player by id.
    async fn update(&self, id: &str, data: &PlayerData) -> Result<Player, ApplicationError>;

    /// Deletes a player by id.
    async fn remove(&self, id: &str) -> Result<(), ApplicationError>;
}
