/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_REFRESH_BEFORE_SECS, DEFAULT_TIMEOUT_SECS};
use crate::error::AppError;
use crate::utils::config::{get_env_flag, get_env_or_default, get_required_env};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Authentication credentials for the Akeneo API
pub struct Credentials {
    /// OAuth2 client id of the API connection
    pub client_id: String,
    /// OAuth2 client secret of the API connection
    #[serde(skip_serializing)]
    pub client_secret: String,
    /// Akeneo user name
    pub username: String,
    /// Akeneo user password
    #[serde(skip_serializing)]
    pub password: String,
}

impl Credentials {
    /// Value of the `Authorization` header sent to the token endpoint
    #[must_use]
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(raw))
    }

    /// Overwrites every field with zeroes, then empties it
    pub fn wipe(&mut self) {
        for field in [
            &mut self.client_id,
            &mut self.client_secret,
            &mut self.username,
            &mut self.password,
        ] {
            wipe_string(field);
        }
    }
}

/// Zeroes the string's buffer in place before clearing it
pub(crate) fn wipe_string(value: &mut String) {
    let len = value.len();
    value.clear();
    value.extend(std::iter::repeat_n('\0', len));
    value.clear();
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Akeneo instance, without the `api/rest/v1` suffix
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// Accepts invalid TLS certificates
    pub accept_invalid_certs: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Akeneo API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Seconds before token expiry at which the token is refreshed
    pub refresh_before: u64,
}

impl Config {
    /// Creates a configuration for `base_url` with default settings
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
                accept_invalid_certs: false,
            },
            refresh_before: DEFAULT_REFRESH_BEFORE_SECS,
        }
    }

    /// Reads the configuration from the environment, loading `.env` first
    ///
    /// `AKENEO_URL`, `AKENEO_CLIENT_ID`, `AKENEO_CLIENT_SECRET`, `AKENEO_USERNAME` and
    /// `AKENEO_PASSWORD` are required. `AKENEO_REFRESH_BEFORE`, `AKENEO_TIMEOUT` and
    /// `AKENEO_INSECURE` are optional.
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_required_env("AKENEO_URL")?;
        let credentials = Credentials {
            client_id: get_required_env("AKENEO_CLIENT_ID")?,
            client_secret: get_required_env("AKENEO_CLIENT_SECRET")?,
            username: get_required_env("AKENEO_USERNAME")?,
            password: get_required_env("AKENEO_PASSWORD")?,
        };

        let mut config = Config::new(base_url, credentials);
        config.rest_api.timeout = get_env_or_default("AKENEO_TIMEOUT", DEFAULT_TIMEOUT_SECS);
        config.rest_api.accept_invalid_certs = get_env_flag("AKENEO_INSECURE");
        config.refresh_before =
            get_env_or_default("AKENEO_REFRESH_BEFORE", DEFAULT_REFRESH_BEFORE_SECS);
        Ok(config)
    }
}
