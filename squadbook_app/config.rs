use dotenvy::dotenv;
use std::env;

pub struct Config {
    pub api_url: String,
    pub database_url: String,
    pub favorites_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let api_url = match env::var("SQUADBOOK_API_URL") {
            Ok(val) => val,
            Err(_) => panic!("You need to set env SQUADBOOK_API_URL"),
        };

        let database_url = match env::var("SQUADBOOK_DATABASE_URL") {
            Ok(val) => val,
            Err(_) => "sqlite:squadbook.db".to_string(),
        };

        let favorites_key = match env::var("SQUADBOOK_FAVORITES_KEY") {
            Ok(val) => val,
            Err(_) => "favoritePlayers".to_string(),
        };

        Self {
            api_url,
            database_url,
            favorites_key,
        }
    }
}
