/// OAuth2 token lifecycle
pub mod auth;
/// Client implementing the resource endpoints
pub mod client;
/// Application configuration module
pub mod config;
/// Interfaces of the API services
pub mod interfaces;
