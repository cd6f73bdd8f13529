use serde::{Deserialize, Serialize};

/// A single record from the remote player collection.
///
/// The wire field names are fixed by the remote resource and must round-trip
/// unchanged, hence the renames. Ids are remote-assigned strings and are
/// never renumbered locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    #[serde(rename = "playerName")]
    pub player_name: String,
    #[serde(rename = "YoB")]
    pub birth_year: i32,
    #[serde(rename = "MinutesPlayed")]
    pub minutes_played: u32,
    pub position: String,
    #[serde(rename = "isCaptain")]
    pub is_captain: bool,
    pub image: String,
    pub team: String,
    #[serde(rename = "PassingAccuracy")]
    pub passing_accuracy: f64,
}

/// Payload for create/update calls. Same shape as [`Player`] minus the id,
/// which the remote collection assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    #[serde(rename = "playerName")]
    pub player_name: String,
    #[serde(rename = "YoB")]
    pub birth_year: i32,
    #[serde(rename = "MinutesPlayed")]
    pub minutes_played: u32,
    pub position: String,
    #[serde(rename = "isCaptain")]
    pub is_captain: bool,
    pub image: String,
    pub team: String,
    #[serde(rename = "PassingAccuracy")]
    pub passing_accuracy: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_wire_field_names() {
        let json = r#"{
            "id": "7",
            "playerName": "Luka",
            "YoB": 1985,
            "MinutesPlayed": 2700,
            "position": "Midfielder",
            "isCaptain": true,
            "image": "https://example.com/luka.png",
            "team": "Madrid",
            "PassingAccuracy": 0.91
        }"#;

        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.id, "7");
        assert_eq!(player.player_name, "Luka");
        assert_eq!(player.birth_year, 1985);
        assert!(player.is_captain);

        let back = serde_json::to_value(&player).unwrap();
        assert_eq!(back["playerName"], "Luka");
        assert_eq!(back["YoB"], 1985);
        assert_eq!(back["MinutesPlayed"], 2700);
        assert_eq!(back["isCaptain"], true);
        assert_eq!(back["PassingAccuracy"], 0.91);
    }

    #[test]
    fn test_player_missing_required_field_is_rejected() {
        // No id: the record must not deserialize into a Player.
        let json = r#"{
            "playerName": "Nameless",
            "YoB": 1990,
            "MinutesPlayed": 90,
            "position": "Defender",
            "isCaptain": false,
            "image": "",
            "team": "Nowhere",
            "PassingAccuracy": 0.5
        }"#;

        assert!(serde_json::from_str::<Player>(json).is_err());
    }
}
