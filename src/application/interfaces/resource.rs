/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::filters::Filters;
use crate::model::http::ApiResponse;
use crate::model::path::ResourcePath;
use crate::model::upload::ProductFileUpload;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

/// Interface for the Akeneo resource endpoints
#[async_trait]
pub trait ResourceService: Send + Sync {
    /// Gets a resource or a collection page
    ///
    /// # Arguments
    /// * `path` - Resource path below `api/rest/v1`
    /// * `filters` - Query parameters
    /// * `all` - Follows every `next` link and merges the pages into one response
    async fn get(
        &self,
        path: &ResourcePath,
        filters: &Filters,
        all: bool,
    ) -> Result<ApiResponse, AppError>;

    /// Follows the `next` link of a collection page, if it has one
    async fn get_next_page(&self, response: &ApiResponse) -> Result<Option<ApiResponse>, AppError>;

    /// Creates a resource
    async fn post(&self, path: &ResourcePath, data: Value) -> Result<ApiResponse, AppError>;

    /// Creates or updates a resource
    async fn patch(&self, path: &ResourcePath, data: Value) -> Result<ApiResponse, AppError>;

    /// Deletes a resource
    async fn delete(&self, path: &ResourcePath) -> Result<ApiResponse, AppError>;

    /// Creates or updates several resources at once
    ///
    /// Rows are sent as newline-delimited JSON. The server answers with one status line per row.
    async fn bulk(&self, path: &ResourcePath, rows: &[Value]) -> Result<ApiResponse, AppError>;

    /// Uploads a media file for a product or product model attribute
    async fn upload_product_file(
        &self,
        upload: &ProductFileUpload,
    ) -> Result<ApiResponse, AppError>;

    /// Uploads an asset media file
    async fn upload_asset_file(&self, file: &Path) -> Result<ApiResponse, AppError>;
}
