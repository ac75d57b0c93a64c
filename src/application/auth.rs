/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication module for the Akeneo API
//!
//! This module handles the OAuth2 token lifecycle:
//! - Password grant login
//! - Refresh token grant
//! - Proactive refresh when the access token is about to expire
//! - Wiping credentials and tokens on close
//!
//! The session sits behind a lock so the client can be shared, but a refresh is
//! not atomic: two callers seeing an expiring token may both refresh.

use crate::application::config::{Credentials, RestApiConfig, wipe_string};
use crate::error::AppError;
use crate::model::auth::{TokenRequest, TokenResponse};
use crate::model::http::{RequestBody, RequestDescriptor, make_http_request};
use crate::model::path::token_url;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Token state of an authenticated client
#[derive(Clone)]
pub struct Session {
    access_token: String,
    refresh_token: String,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session from a token pair and its expiry
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_at,
        }
    }

    /// Creates a session from a token response received at `now`
    ///
    /// Returns `None` when `now + expires_in` is not a representable instant.
    pub fn from_token_response(token: TokenResponse, now: DateTime<Utc>) -> Option<Self> {
        let expires_at = ChronoDuration::try_seconds(token.expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))?;
        Some(Self::new(token.access_token, token.refresh_token, expires_at))
    }

    /// Bearer token sent with every authenticated call
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Token exchanged for a new pair on refresh
    #[must_use]
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Instant the access token expires
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Value of the `Authorization` header
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Checks if the token must be refreshed at `now`
    ///
    /// True when `now > expires_at - margin`. At exactly `expires_at - margin`
    /// the token is still considered fresh.
    #[must_use]
    pub fn needs_refresh_at(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        let Ok(margin) = ChronoDuration::from_std(margin) else {
            return true;
        };
        match self.expires_at.checked_sub_signed(margin) {
            Some(deadline) => now > deadline,
            None => true,
        }
    }

    /// Checks if the token must be refreshed now
    #[must_use]
    pub fn needs_refresh(&self, margin: Duration) -> bool {
        self.needs_refresh_at(Utc::now(), margin)
    }

    /// Gets the number of seconds until the access token expires, negative once expired
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds()
    }

    fn wipe(&mut self) {
        wipe_string(&mut self.access_token);
        wipe_string(&mut self.refresh_token);
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

/// Authentication manager for the Akeneo API
///
/// Handles all authentication operations including:
/// - Login with the password grant
/// - Token refresh with the refresh token grant
/// - Refresh before expiry on every session lookup
/// - Credential wiping
pub struct Auth {
    client: Client,
    rest_api: Arc<RestApiConfig>,
    credentials: RwLock<Option<Credentials>>,
    session: RwLock<Option<Session>>,
    refresh_before: Duration,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `client` - Transport used for the token exchange
    /// * `rest_api` - Base URL and transport settings
    /// * `credentials` - Client id/secret and user credentials
    /// * `refresh_before` - Window before expiry in which the token is refreshed
    pub fn new(
        client: Client,
        rest_api: Arc<RestApiConfig>,
        credentials: Credentials,
        refresh_before: Duration,
    ) -> Self {
        Self {
            client,
            rest_api,
            credentials: RwLock::new(Some(credentials)),
            session: RwLock::new(None),
            refresh_before,
        }
    }

    /// Window before expiry in which the token is refreshed
    pub fn refresh_before(&self) -> Duration {
        self.refresh_before
    }

    /// Gets the current session, refreshing the token if it is about to expire
    ///
    /// # Returns
    /// * `Ok(Session)` - Session with a fresh access token
    /// * `Err(AppError::NotAuthenticated)` - If no login happened yet
    /// * `Err(AppError)` - If the refresh fails
    pub async fn get_session(&self) -> Result<Session, AppError> {
        let session = self.session.read().await;
        let Some(sess) = session.as_ref() else {
            return Err(AppError::NotAuthenticated);
        };

        if sess.needs_refresh(self.refresh_before) {
            drop(session);
            info!(
                "The token will expire in less than {}s. Refreshing it...",
                self.refresh_before.as_secs()
            );
            return self.refresh().await;
        }
        Ok(sess.clone())
    }

    /// Current session without any freshness check
    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Checks if a login happened and the client was not closed since
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Exchanges a username and password for a token pair
    ///
    /// # Returns
    /// * `Ok(Session)` - Authenticated session
    /// * `Err(AppError::UnexpectedResponse)` - If the response misses a token field
    /// * `Err(AppError)` - If the request fails
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        let session = self
            .request_token(TokenRequest::Password {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await?;
        info!(
            "Login successful ! Token will expire at {}",
            session.expires_at()
        );
        Ok(session)
    }

    /// Logs in with the username and password given at construction
    pub async fn login_with_credentials(&self) -> Result<Session, AppError> {
        let (username, password) = {
            let credentials = self.credentials.read().await;
            let creds = credentials.as_ref().ok_or(AppError::Closed)?;
            (creds.username.clone(), creds.password.clone())
        };
        self.login(&username, &password).await
    }

    /// Exchanges the stored refresh token for a new token pair
    ///
    /// # Returns
    /// * `Ok(Session)` - Session with the new token pair
    /// * `Err(AppError::NotAuthenticated)` - If no login happened yet
    /// * `Err(AppError)` - If the exchange fails
    pub async fn refresh(&self) -> Result<Session, AppError> {
        let refresh_token = {
            let session = self.session.read().await;
            let sess = session.as_ref().ok_or(AppError::NotAuthenticated)?;
            sess.refresh_token().to_string()
        };
        let session = self
            .request_token(TokenRequest::RefreshToken { refresh_token })
            .await?;
        info!(
            "Token refresh successful ! New token will expire at {}",
            session.expires_at()
        );
        Ok(session)
    }

    async fn request_token(&self, grant: TokenRequest) -> Result<Session, AppError> {
        let basic_auth = {
            let credentials = self.credentials.read().await;
            credentials
                .as_ref()
                .ok_or(AppError::Closed)?
                .basic_auth_header()
        };

        let url = token_url(&self.rest_api.base_url)?;
        debug!("Requesting {} token from: {}", grant.grant_type(), url);

        let request = RequestDescriptor::new(Method::POST, url)
            .with_header(AUTHORIZATION, HeaderValue::from_str(&basic_auth)?)
            .with_body(RequestBody::Json(serde_json::to_value(&grant)?))
            .sensitive();
        let response = make_http_request(&self.client, request).await?;

        let token = TokenResponse::from_body(&response.body)?;
        let session = Session::from_token_response(token, Utc::now()).ok_or_else(|| {
            AppError::UnexpectedResponse {
                expected: "expires_in".to_string(),
                got: response.body.clone(),
            }
        })?;

        let mut sess = self.session.write().await;
        *sess = Some(session.clone());
        Ok(session)
    }

    /// Wipes the credentials and the token pair
    ///
    /// Later authenticated calls fail with [`AppError::NotAuthenticated`], later
    /// logins with [`AppError::Closed`].
    pub async fn close(&self) {
        if let Some(mut credentials) = self.credentials.write().await.take() {
            credentials.wipe();
        }
        if let Some(mut session) = self.session.write().await.take() {
            session.wipe();
        }
        debug!("Credentials and tokens wiped");
    }
}
