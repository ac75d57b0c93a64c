/// Environment variable helpers
pub mod config;
/// Logging setup
pub mod logger;

pub use config::*;
pub use logger::*;
