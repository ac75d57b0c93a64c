/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::http::ResponseBody;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields the token endpoint must return, in the order they are checked
pub const TOKEN_FIELDS: [&str; 3] = ["access_token", "refresh_token", "expires_in"];

/// Body sent to the OAuth2 token endpoint
#[derive(Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "grant_type", rename_all = "snake_case")]
pub enum TokenRequest {
    /// Exchanges a username and password for a token pair
    Password {
        /// Akeneo user name
        username: String,
        /// Akeneo user password
        password: String,
    },
    /// Exchanges a refresh token for a new token pair
    RefreshToken {
        /// Refresh token from the previous exchange
        refresh_token: String,
    },
}

impl TokenRequest {
    /// Name of the grant, as sent in `grant_type`
    #[must_use]
    pub fn grant_type(&self) -> &'static str {
        match self {
            TokenRequest::Password { .. } => "password",
            TokenRequest::RefreshToken { .. } => "refresh_token",
        }
    }
}

impl fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRequest")
            .field("grant_type", &self.grant_type())
            .finish_non_exhaustive()
    }
}

/// Token pair returned by the OAuth2 token endpoint
#[derive(Deserialize, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    /// Short lived bearer token
    pub access_token: String,
    /// Longer lived token used to obtain a new access token
    pub refresh_token: String,
    /// Lifetime of the access token in seconds
    pub expires_in: i64,
}

impl TokenResponse {
    /// Extracts the token pair from a decoded response body
    ///
    /// # Returns
    /// * `Err(AppError::UnexpectedResponse)` - naming the first of `access_token`,
    ///   `refresh_token`, `expires_in` that is missing
    pub fn from_body(body: &ResponseBody) -> Result<Self, AppError> {
        let object = body.as_json().and_then(|v| v.as_object());
        for field in TOKEN_FIELDS {
            if !object.is_some_and(|o| o.contains_key(field)) {
                return Err(AppError::UnexpectedResponse {
                    expected: field.to_string(),
                    got: body.clone(),
                });
            }
        }
        let value = body.as_json().cloned().unwrap_or_default();
        Ok(serde_json::from_value(value)?)
    }
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}
