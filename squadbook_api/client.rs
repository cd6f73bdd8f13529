use squadbook_app::repository::PlayerSource;
use squadbook_types::errors::{ApplicationError, TransportError};
use squadbook_types::player::{Player, PlayerData};

/// Implements PlayerSource against the REST-like remote player collection:
/// `GET {base}`, `GET {base}/{id}`, `POST {base}`, `PUT {base}/{id}`,
/// `DELETE {base}/{id}`.
#[derive(Debug, Clone)]
pub struct HttpPlayerSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPlayerSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Decodes the listing payload element by element. A record that does not
/// match the Player shape is skipped with a warning instead of failing the
/// whole listing, so one bad row upstream cannot blank the squad.
fn decode_players(raw: Vec<serde_json::Value>) -> Vec<Player> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(player) => Some(player),
            Err(err) => {
                tracing::warn!("Skipping malformed player record at index {index}: {err}");
                None
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl PlayerSource for HttpPlayerSource {
    async fn list(&self) -> Result<Vec<Player>, ApplicationError> {
        let raw: Vec<serde_json::Value> = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(TransportError::from)?
            .error_for_status()
            .map_err(TransportError::from)?
            .json()
            .await
            .map_err(TransportError::from)?;

        Ok(decode_players(raw))
    }

    async fn get_by_id(&self, id: &str) -> Result<Player, ApplicationError> {
        let value: serde_json::Value = self
            .client
            .get(self.item_url(id))
            .send()
            .await
            .map_err(TransportError::from)?
            .error_for_status()
            .map_err(TransportError::from)?
            .json()
            .await
            .map_err(TransportError::from)?;

        let player = serde_json::from_value(value)
            .map_err(|err| TransportError::Decode(format!("player {id}: {err}")))?;

        Ok(player)
    }

    async fn create(&self, data: &PlayerData) -> Result<Player, ApplicationError> {
        let player = self
            .client
            .post(&self.base_url)
            .json(data)
            .send()
            .await
            .map_err(TransportError::from)?
            .error_for_status()
            .map_err(TransportError::from)?
            .json()
            .await
            .map_err(TransportError::from)?;

        Ok(player)
    }

    async fn update(&self, id: &str, data: &PlayerData) -> Result<Player, ApplicationError> {
        let player = self
            .client
            .put(self.item_url(id))
            .json(data)
            .send()
            .await
            .map_err(TransportError::from)?
            .error_for_status()
            .map_err(TransportError::from)?
            .json()
            .await
            .map_err(TransportError::from)?;

        Ok(player)
    }

    async fn remove(&self, id: &str) -> Result<(), ApplicationError> {
        self.client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(TransportError::from)?
            .error_for_status()
            .map_err(TransportError::from)?;

        Ok(())
    }
}
