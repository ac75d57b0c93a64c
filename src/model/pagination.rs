/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Cursor pagination over Akeneo collection responses
//!
//! A list endpoint returns `{_embedded: {items: [...]}, _links: {next: {href}}, current_page}`.
//! [`walk_pages`] follows every `next` link and stitches the item lists into the
//! first page, then strips the pagination metadata.

use crate::error::AppError;
use crate::model::http::ApiResponse;
use serde_json::{Map, Value};
use std::future::Future;
use tracing::debug;
use url::Url;

/// Keys removed from a merged collection
pub const PAGINATION_KEYS: [&str; 2] = ["_links", "current_page"];

/// Absolute URL of the next page, if the body links one
pub fn next_link(body: &Value) -> Option<&str> {
    body.get("_links")?.get("next")?.get("href")?.as_str()
}

/// Items of a collection page
pub fn page_items(body: &Value) -> &[Value] {
    body.pointer("/_embedded/items")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Appends `items` to the `_embedded.items` list of `merged`, creating it if needed
pub fn append_items(merged: &mut Value, items: Vec<Value>) {
    let Some(object) = merged.as_object_mut() else {
        return;
    };
    let embedded = object
        .entry("_embedded")
        .or_insert_with(|| Value::Object(Map::new()));
    let Some(embedded) = embedded.as_object_mut() else {
        return;
    };
    let list = embedded
        .entry("items")
        .or_insert_with(|| Value::Array(Vec::new()));
    if let Some(list) = list.as_array_mut() {
        list.extend(items);
    }
}

/// Removes the pagination links and page counter
pub fn strip_pagination(body: &mut Value) {
    if let Some(object) = body.as_object_mut() {
        for key in PAGINATION_KEYS {
            object.remove(key);
        }
    }
}

/// Follows `next` links from `first` until none is left
///
/// `fetch` issues the request for one page URL. Items are appended in the order
/// pages are returned. The result holds no `_links` or `current_page` key.
pub async fn walk_pages<F, Fut>(first: ApiResponse, mut fetch: F) -> Result<ApiResponse, AppError>
where
    F: FnMut(Url) -> Fut,
    Fut: Future<Output = Result<ApiResponse, AppError>>,
{
    let mut merged = first;
    let Some(body) = merged.body.as_json_mut() else {
        return Ok(merged);
    };

    let mut next = next_link(body).map(str::to_owned);
    let mut pages = 1;
    while let Some(href) = next {
        let url = Url::parse(&href)?;
        debug!("Fetching page {} from {}", pages + 1, url);
        let page = fetch(url).await?;
        pages += 1;

        let mut page_body = page.body.into_json().unwrap_or_default();
        next = next_link(&page_body).map(str::to_owned);
        let items = page_body
            .pointer_mut("/_embedded/items")
            .map(Value::take)
            .and_then(|v| match v {
                Value::Array(items) => Some(items),
                _ => None,
            })
            .unwrap_or_default();
        append_items(body, items);
    }

    strip_pagination(body);
    debug!(
        "Merged {} pages into {} items",
        pages,
        page_items(body).len()
    );
    Ok(merged)
}
