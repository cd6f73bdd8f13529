mod connection;
mod store;

pub use connection::{DbPool, establish_connection_pool, establish_test_connection_pool};
pub use store::SqliteKeyValueStore;
