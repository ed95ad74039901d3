pub mod car;
pub mod config;
pub mod search;
