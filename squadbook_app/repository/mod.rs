mod key_value_store;
mod player_source;

pub use key_value_store::KeyValueStore;
pub use player_source::PlayerSource;
