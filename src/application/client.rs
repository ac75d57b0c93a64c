/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the Akeneo REST API
//!
//! This module provides a client that handles:
//! - Authentication and token refresh
//! - Merging paginated collections
//! - JSON, bulk and multipart payloads
//!
//! # Example
//! ```ignore
//! use akeneo_cli::prelude::*;
//!
//! let client = Client::new(Config::from_env()?).await?;
//! let products = client
//!     .get(&ResourcePath::new("products"), &Filters::new().with("limit", 100), true)
//!     .await?;
//! client.close().await;
//! ```

use crate::application::auth::Session;
use crate::application::config::Config;
use crate::application::interfaces::resource::ResourceService;
use crate::constants::{
    ASSET_MEDIA_FILES_PATH, COLLECTION_CONTENT_TYPE, MEDIA_FILES_PATH, MULTIPART_CONTENT_TYPE,
};
use crate::error::AppError;
use crate::model::bulk::to_ndjson;
use crate::model::filters::Filters;
use crate::model::http::{ApiResponse, HttpClient, RequestBody};
use crate::model::pagination::{next_link, walk_pages};
use crate::model::path::ResourcePath;
use crate::model::upload::{ProductFileUpload, UploadForm};
use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Client for the Akeneo REST API
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client and logs in with the configured credentials
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config).await?);
        Ok(Self { http_client })
    }

    /// Creates a client without logging in
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new_lazy(config)?);
        Ok(Self { http_client })
    }

    /// Logs in with the configured credentials
    pub async fn login(&self) -> Result<Session, AppError> {
        self.http_client.login().await
    }

    /// Wipes the credentials and tokens; the client cannot be used afterwards
    pub async fn close(&self) {
        self.http_client.close().await;
    }

    /// Underlying authenticated HTTP client
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    async fn send(
        &self,
        method: Method,
        path: &ResourcePath,
        body: RequestBody,
        headers: HeaderMap,
    ) -> Result<ApiResponse, AppError> {
        self.http_client
            .call_api(method, &path.to_string(), &Filters::new(), body, headers)
            .await
    }

    async fn upload(&self, endpoint: &str, form: UploadForm) -> Result<ApiResponse, AppError> {
        info!("Uploading {} to {}", form.file().display(), endpoint);
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(MULTIPART_CONTENT_TYPE));
        self.send(
            Method::POST,
            &ResourcePath::new(endpoint),
            RequestBody::Form(form),
            headers,
        )
        .await
    }
}

#[async_trait]
impl ResourceService for Client {
    async fn get(
        &self,
        path: &ResourcePath,
        filters: &Filters,
        all: bool,
    ) -> Result<ApiResponse, AppError> {
        let path = path.to_string();
        debug!("Getting {} (all pages: {})", path, all);
        let first = self
            .http_client
            .call_api(
                Method::GET,
                &path,
                filters,
                RequestBody::Empty,
                HeaderMap::new(),
            )
            .await?;
        if !all {
            return Ok(first);
        }

        let http_client: &HttpClient = &self.http_client;
        walk_pages(first, move |url: Url| {
            http_client.call_url(Method::GET, url, RequestBody::Empty, HeaderMap::new())
        })
        .await
    }

    async fn get_next_page(&self, response: &ApiResponse) -> Result<Option<ApiResponse>, AppError> {
        let Some(href) = response.json().and_then(next_link) else {
            return Ok(None);
        };
        let url = Url::parse(href)?;
        let page = self
            .http_client
            .call_url(Method::GET, url, RequestBody::Empty, HeaderMap::new())
            .await?;
        Ok(Some(page))
    }

    async fn post(&self, path: &ResourcePath, data: Value) -> Result<ApiResponse, AppError> {
        self.send(Method::POST, path, RequestBody::Json(data), HeaderMap::new())
            .await
    }

    async fn patch(&self, path: &ResourcePath, data: Value) -> Result<ApiResponse, AppError> {
        self.send(Method::PATCH, path, RequestBody::Json(data), HeaderMap::new())
            .await
    }

    async fn delete(&self, path: &ResourcePath) -> Result<ApiResponse, AppError> {
        self.send(Method::DELETE, path, RequestBody::Empty, HeaderMap::new())
            .await
    }

    async fn bulk(&self, path: &ResourcePath, rows: &[Value]) -> Result<ApiResponse, AppError> {
        info!("Sending {} records to {}", rows.len(), path);
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(COLLECTION_CONTENT_TYPE));
        self.send(
            Method::PATCH,
            path,
            RequestBody::Text(to_ndjson(rows)?),
            headers,
        )
        .await
    }

    async fn upload_product_file(
        &self,
        upload: &ProductFileUpload,
    ) -> Result<ApiResponse, AppError> {
        self.upload(MEDIA_FILES_PATH, upload.to_form()).await
    }

    async fn upload_asset_file(&self, file: &Path) -> Result<ApiResponse, AppError> {
        self.upload(ASSET_MEDIA_FILES_PATH, UploadForm::new(file))
            .await
    }
}
