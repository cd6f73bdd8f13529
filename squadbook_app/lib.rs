pub mod config;
pub mod favorites;
pub mod repository;
pub mod views;

pub mod test_utils;
