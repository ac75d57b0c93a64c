/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// OAuth2 token exchange models
pub mod auth;
/// Newline-delimited JSON for bulk updates
pub mod bulk;
/// Query string parameters
pub mod filters;
/// HTTP call primitive and authenticated client
pub mod http;
/// Cursor pagination walker
pub mod pagination;
/// Resource path and URL composition
pub mod path;
/// Multipart file uploads
pub mod upload;
