/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Akeneo CLI Prelude
//!
//! Brings the types needed for most Akeneo API interactions into scope.
//!
//! ```rust
//! use akeneo_cli::prelude::*;
//!
//! let path = ResourcePath::new("products").code("SKU-1");
//! assert_eq!(path.to_string(), "products/SKU-1");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Akeneo API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, RequestError};

// ============================================================================
// AUTHENTICATION AND CLIENTS
// ============================================================================

/// Token lifecycle
pub use crate::application::auth::{Auth, Session};

/// Resource client and its interface
pub use crate::application::client::Client;
pub use crate::application::interfaces::resource::ResourceService;

/// Authenticated HTTP client and call primitive
pub use crate::model::http::{
    ApiResponse, HttpClient, RequestBody, RequestDescriptor, ResponseBody, make_http_request,
};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::filters::Filters;
pub use crate::model::path::ResourcePath;
pub use crate::model::upload::{ProductFileUpload, UploadForm};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::{build_dispatch, level_from_flags};

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use serde_json::{Value, json};
pub use tracing::{debug, error, info, warn};
