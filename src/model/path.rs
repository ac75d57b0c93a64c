/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Resource path and URL composition
//!
//! A path is `type[/code][/sub_type[/sub_code]][/sub_sub_type[/sub_sub_code]]`.
//! Each nested level only appears when its type is set. Codes are not validated:
//! leaving out a code the endpoint needs is the caller's mistake.

use crate::constants::{API_VERSION, OAUTH_PATH_SUFFIX, REST_PATH_SUFFIX, TOKEN_PATH};
use crate::error::AppError;
use crate::model::filters::Filters;
use std::fmt;
use url::Url;

/// Path of a resource, with up to two nested sub-resources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePath {
    kind: String,
    code: Option<String>,
    sub_kind: Option<String>,
    sub_code: Option<String>,
    sub_sub_kind: Option<String>,
    sub_sub_code: Option<String>,
}

impl ResourcePath {
    /// Creates a path pointing at a resource collection, e.g. `products`
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Builds a path from optional parts, as the CLI receives them
    pub fn from_parts(
        kind: &str,
        code: Option<&str>,
        sub_kind: Option<&str>,
        sub_code: Option<&str>,
        sub_sub_kind: Option<&str>,
        sub_sub_code: Option<&str>,
    ) -> Self {
        Self {
            kind: kind.to_string(),
            code: code.map(str::to_string),
            sub_kind: sub_kind.map(str::to_string),
            sub_code: sub_code.map(str::to_string),
            sub_sub_kind: sub_sub_kind.map(str::to_string),
            sub_sub_code: sub_sub_code.map(str::to_string),
        }
    }

    /// Points the path at a single resource
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Adds the first nested level
    #[must_use]
    pub fn sub(mut self, kind: impl Into<String>, code: Option<&str>) -> Self {
        self.sub_kind = Some(kind.into());
        self.sub_code = code.map(str::to_string);
        self
    }

    /// Adds the second nested level
    #[must_use]
    pub fn sub_sub(mut self, kind: impl Into<String>, code: Option<&str>) -> Self {
        self.sub_sub_kind = Some(kind.into());
        self.sub_sub_code = code.map(str::to_string);
        self
    }

    /// Resource type at the root of the path
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind)?;
        if let Some(code) = &self.code {
            write!(f, "/{code}")?;
        }
        if let Some(sub_kind) = &self.sub_kind {
            write!(f, "/{sub_kind}")?;
            if let Some(sub_code) = &self.sub_code {
                write!(f, "/{sub_code}")?;
            }
        }
        if let Some(sub_sub_kind) = &self.sub_sub_kind {
            write!(f, "/{sub_sub_kind}")?;
            if let Some(sub_sub_code) = &self.sub_sub_code {
                write!(f, "/{sub_sub_code}")?;
            }
        }
        Ok(())
    }
}

fn api_url(base_url: &str, suffix: &str, path: &str) -> Result<Url, AppError> {
    let raw = format!(
        "{}/{}/{}/{}",
        base_url.trim_end_matches('/'),
        suffix,
        API_VERSION,
        path.trim_start_matches('/')
    );
    Ok(Url::parse(&raw)?)
}

/// URL of a REST resource: `{base_url}/api/rest/v1/{path}?{filters}`
pub fn rest_url(base_url: &str, path: &str, filters: &Filters) -> Result<Url, AppError> {
    let mut url = api_url(base_url, REST_PATH_SUFFIX, path)?;
    filters.apply(&mut url);
    Ok(url)
}

/// URL of the OAuth2 token endpoint: `{base_url}/api/oauth/v1/token`
pub fn token_url(base_url: &str) -> Result<Url, AppError> {
    api_url(base_url, OAUTH_PATH_SUFFIX, TOKEN_PATH)
}
