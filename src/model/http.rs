/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::auth::{Auth, Session};
use crate::application::config::{Config, RestApiConfig};
use crate::constants::{JSON_CONTENT_TYPE, MULTIPART_CONTENT_TYPE, USER_AGENT};
use crate::error::{AppError, RequestError};
use crate::model::filters::Filters;
use crate::model::path::rest_url;
use crate::model::upload::UploadForm;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Body of an outgoing request
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// Structure serialized as JSON when the declared content type is JSON
    Json(Value),
    /// Text sent verbatim
    Text(String),
    /// Multipart form holding a file read from disk
    Form(UploadForm),
}

impl RequestBody {
    /// Renders the body for diagnostics
    #[must_use]
    pub fn describe(&self) -> Option<String> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Json(value) => Some(value.to_string()),
            RequestBody::Text(text) => Some(text.clone()),
            RequestBody::Form(form) => Some(form.describe()),
        }
    }
}

/// A single HTTP request: method, URL, headers and body
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: Method,
    /// Full URL
    pub url: Url,
    /// Headers, defaulting to JSON accept and content type
    pub headers: HeaderMap,
    /// Request body
    pub body: RequestBody,
    sensitive: bool,
}

impl RequestDescriptor {
    /// Creates a request with `Accept` and `Content-Type` set to `application/json`
    pub fn new(method: Method, url: Url) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Self {
            method,
            url,
            headers,
            body: RequestBody::Empty,
            sensitive: false,
        }
    }

    /// Sets a header, replacing any previous value
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Merges caller supplied headers over the current ones
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        for (name, value) in headers.iter() {
            self.headers.insert(name.clone(), value.clone());
        }
        self
    }

    /// Sets the body
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Keeps the body out of error diagnostics
    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Declared content type without parameters
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(media_type)
    }
}

/// Decoded body of a response
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Response without a body
    Empty,
    /// JSON response decoded into a value
    Json(Value),
    /// Anything else, as raw text
    Text(String),
}

impl ResponseBody {
    /// Decodes `text` as JSON when the headers declare a JSON body
    ///
    /// An empty body is [`ResponseBody::Empty`] whatever the content type.
    /// A JSON body that fails to decode is logged and returned as raw text.
    pub fn decode(headers: &HeaderMap, text: String) -> Self {
        if text.is_empty() {
            return ResponseBody::Empty;
        }
        if !is_json(headers) {
            return ResponseBody::Text(text);
        }
        match serde_json::from_str(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(e) => {
                error!("Error get json from response: {}:\n{}", e, text);
                ResponseBody::Text(text)
            }
        }
    }

    /// Decoded JSON, if any
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Mutable access to the decoded JSON, if any
    pub fn as_json_mut(&mut self) -> Option<&mut Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the body, keeping only decoded JSON
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Raw text, if the body was not JSON
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Empty => Ok(()),
            ResponseBody::Json(value) => write!(f, "{value}"),
            ResponseBody::Text(text) => f.write_str(text),
        }
    }
}

/// Successful response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Status code, always 2xx
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Decoded body
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Decoded JSON body, if any
    #[must_use]
    pub fn json(&self) -> Option<&Value> {
        self.body.as_json()
    }
}

fn media_type(value: &str) -> &str {
    value.split(';').next().unwrap_or_default().trim()
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| media_type(v).eq_ignore_ascii_case(JSON_CONTENT_TYPE))
}

/// Issues one HTTP request and classifies the response
///
/// The body is encoded according to the declared content type:
/// - `application/json`: JSON bodies are serialized, text is sent as is
/// - `multipart/form-data`: the content type header is dropped so the transport can
///   set the boundary, and the form's file is read from disk
/// - anything else: the body is sent verbatim
///
/// # Returns
/// * `Ok(ApiResponse)` - Status at most 299
/// * `Err(AppError::NotFound)` - Status 404
/// * `Err(AppError::Request)` - Any other status above 299
pub async fn make_http_request(
    client: &Client,
    request: RequestDescriptor,
) -> Result<ApiResponse, AppError> {
    let content_type = request.content_type().map(str::to_ascii_lowercase);
    let request_body = if request.sensitive {
        request.body.describe().map(|_| String::from("<redacted>"))
    } else {
        request.body.describe()
    };
    let RequestDescriptor {
        method,
        url,
        mut headers,
        body,
        ..
    } = request;

    let builder = match content_type.as_deref() {
        Some(MULTIPART_CONTENT_TYPE) => {
            headers.remove(CONTENT_TYPE);
            let RequestBody::Form(form) = body else {
                return Err(AppError::InvalidInput(
                    "multipart requests need a form body".to_string(),
                ));
            };
            client
                .request(method.clone(), url.clone())
                .headers(headers)
                .multipart(form.into_multipart().await?)
        }
        Some(JSON_CONTENT_TYPE) => {
            let builder = client.request(method.clone(), url.clone()).headers(headers);
            match body {
                RequestBody::Empty => builder,
                RequestBody::Json(value) => builder.body(serde_json::to_vec(&value)?),
                RequestBody::Text(text) => builder.body(text),
                RequestBody::Form(_) => {
                    return Err(AppError::InvalidInput(
                        "form bodies need a multipart content type".to_string(),
                    ));
                }
            }
        }
        _ => {
            let builder = client.request(method.clone(), url.clone()).headers(headers);
            match body {
                RequestBody::Empty => builder,
                RequestBody::Json(value) => builder.body(value.to_string()),
                RequestBody::Text(text) => builder.body(text),
                RequestBody::Form(_) => {
                    return Err(AppError::InvalidInput(
                        "form bodies need a multipart content type".to_string(),
                    ));
                }
            }
        }
    };

    let response = builder.send().await?;
    let status = response.status();
    debug!("API Call: {} {} {}", status.as_u16(), method, url);

    let response_headers = response.headers().clone();
    let text = response.text().await?;
    let body = ResponseBody::decode(&response_headers, text);

    if status.as_u16() > 299 {
        let request_error = RequestError {
            method,
            url: url.to_string(),
            status,
            headers: response_headers,
            request_body,
            response_body: body,
        };
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(request_error));
        }
        return Err(AppError::Request(request_error));
    }

    Ok(ApiResponse {
        status,
        headers: response_headers,
        body,
    })
}

/// Builds the transport shared by the token exchange and the resource calls
pub fn build_transport(rest_api: &RestApiConfig) -> Result<Client, AppError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(rest_api.timeout))
        .danger_accept_invalid_certs(rest_api.accept_invalid_certs)
        .build()?)
}

/// HTTP client that injects a fresh bearer token into every call
///
/// Before each call the session is checked and refreshed when the access token
/// expires within the configured window, so one logical call can make two round
/// trips.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    rest_api: Arc<RestApiConfig>,
}

impl HttpClient {
    /// Creates a new client and performs the password grant with the configured credentials
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the transport cannot be built or login fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config)?;
        client.auth.login_with_credentials().await?;
        Ok(client)
    }

    /// Creates a new client without logging in
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let Config {
            credentials,
            rest_api,
            refresh_before,
        } = config;
        let rest_api = Arc::new(rest_api);
        let http_client = build_transport(&rest_api)?;
        let auth = Arc::new(Auth::new(
            http_client.clone(),
            rest_api.clone(),
            credentials,
            Duration::from_secs(refresh_before),
        ));

        Ok(Self {
            auth,
            http_client,
            rest_api,
        })
    }

    /// Calls `{base_url}/api/rest/v1/{path}` with the given filters as query string
    pub async fn call_api(
        &self,
        method: Method,
        path: &str,
        filters: &Filters,
        body: RequestBody,
        headers: HeaderMap,
    ) -> Result<ApiResponse, AppError> {
        let url = rest_url(&self.rest_api.base_url, path, filters)?;
        self.call_url(method, url, body, headers).await
    }

    /// Calls an already resolved URL, such as a pagination link
    pub async fn call_url(
        &self,
        method: Method,
        url: Url,
        body: RequestBody,
        headers: HeaderMap,
    ) -> Result<ApiResponse, AppError> {
        let session = self.auth.get_session().await?;
        let request = RequestDescriptor::new(method, url)
            .with_headers(headers)
            .with_header(AUTHORIZATION, HeaderValue::from_str(&session.bearer())?)
            .with_body(body);
        make_http_request(&self.http_client, request).await
    }

    /// Performs the password grant with the configured credentials
    pub async fn login(&self) -> Result<Session, AppError> {
        self.auth.login_with_credentials().await
    }

    /// Gets the current session, refreshing it if it is about to expire
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.auth.get_session().await
    }

    /// Wipes the credentials and tokens
    pub async fn close(&self) {
        self.auth.close().await;
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}
