/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Akeneo CLI
//!
//! Client for the Akeneo PIM REST API and the `akeneo` command built on it.
//!
//! The client logs in with the OAuth2 password grant, refreshes the access token
//! before it expires, and walks cursor pagination so that a collection spread over
//! many pages comes back as one response. Resources are read, created, patched,
//! deleted, bulk updated and receive file uploads through [`application::client::Client`].
//!
//! ```ignore
//! use akeneo_cli::prelude::*;
//!
//! let client = Client::new(Config::from_env()?).await?;
//! let product = client
//!     .get(&ResourcePath::new("products").code("SKU-1"), &Filters::new(), false)
//!     .await?;
//! println!("{}", product.body);
//! client.close().await;
//! ```

/// Token lifecycle, configuration and the resource client
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request, response and payload models
pub mod model;
/// Commonly used imports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
