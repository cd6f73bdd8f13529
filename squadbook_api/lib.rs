mod client;

pub use client::HttpPlayerSource;
