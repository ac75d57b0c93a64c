/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use std::fmt::Display;
use url::Url;

/// Ordered query parameters appended to a resource URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters(Vec<(String, String)>);

impl Filters {
    /// Creates an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter and returns the filter set
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.push(key, value);
        self
    }

    /// Appends a parameter
    pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
        self.0.push((key.into(), value.to_string()));
    }

    /// Parses a `key=value` pair, as given on the command line
    pub fn parse_pair(raw: &str) -> Result<(String, String), AppError> {
        match raw.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(AppError::InvalidInput(format!(
                "filter '{raw}' must look like key=value"
            ))),
        }
    }

    /// Checks if no parameter was added
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Appends the parameters to the URL query string, URL-encoded
    pub fn apply(&self, url: &mut Url) {
        if self.is_empty() {
            return;
        }
        let mut pairs = url.query_pairs_mut();
        for (key, value) in self.iter() {
            pairs.append_pair(key, value);
        }
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Filters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut filters = Filters::new();
        for (key, value) in iter {
            filters.push(key, value);
        }
        filters
    }
}
