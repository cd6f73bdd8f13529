pub mod errors;
pub mod favorites;
pub mod player;

pub use errors::{ApplicationError, Result};
