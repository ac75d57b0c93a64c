/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

/// Seconds before token expiry at which a refresh is triggered
pub const DEFAULT_REFRESH_BEFORE_SECS: u64 = 300;
/// Default timeout in seconds for a single HTTP request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default page requested by list commands
pub const DEFAULT_PAGE: u32 = 1;
/// Default number of items per page requested by list commands
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// User agent string used in HTTP requests to identify this client to the Akeneo API
pub const USER_AGENT: &str = concat!("akeneo-cli/", env!("CARGO_PKG_VERSION"));

/// Path prefix of the REST resource endpoints
pub const REST_PATH_SUFFIX: &str = "api/rest";
/// Path prefix of the OAuth2 endpoints
pub const OAUTH_PATH_SUFFIX: &str = "api/oauth";
/// Version segment shared by the REST and OAuth2 endpoints
pub const API_VERSION: &str = "v1";
/// Path of the token endpoint below the OAuth2 prefix
pub const TOKEN_PATH: &str = "token";

/// Content type of JSON payloads
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Content type of file uploads
pub const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";
/// Content type of newline-delimited bulk updates
pub const COLLECTION_CONTENT_TYPE: &str = "application/vnd.akeneo.collection+json";
/// MIME type used when a file's type cannot be sniffed from its content
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Endpoint receiving product and product model media files
pub const MEDIA_FILES_PATH: &str = "media-files";
/// Endpoint receiving asset media files
pub const ASSET_MEDIA_FILES_PATH: &str = "asset-media-files";
