use crate::common::{mock_login, test_config};
use akeneo_cli::application::client::Client;
use akeneo_cli::application::interfaces::resource::ResourceService;
use akeneo_cli::error::AppError;
use akeneo_cli::model::filters::Filters;
use akeneo_cli::model::http::ResponseBody;
use akeneo_cli::model::path::ResourcePath;
use akeneo_cli::model::upload::ProductFileUpload;
use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use std::io::Write;

async fn logged_in(server: &mut ServerGuard) -> Client {
    mock_login(server).await;
    Client::new(test_config(&server.url())).await.unwrap()
}

fn collection(server_url: &str, codes: &[&str], next: Option<&str>) -> String {
    let items: Vec<_> = codes.iter().map(|c| json!({"identifier": c})).collect();
    let mut links = json!({"self": {"href": format!("{server_url}/api/rest/v1/products")}});
    if let Some(next) = next {
        links["next"] = json!({"href": format!("{server_url}/api/rest/v1/products?{next}")});
    }
    json!({"_links": links, "current_page": 1, "_embedded": {"items": items}}).to_string()
}

#[tokio::test]
async fn test_get_single_page_keeps_links() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server).await;
    let url = server.url();
    server
        .mock("GET", "/api/rest/v1/products")
        .match_query(Matcher::Exact("page=2&limit=10".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(collection(&url, &["a"], Some("page=3&limit=10")))
        .create_async()
        .await;

    let filters = Filters::new().with("page", 2).with("limit", 10);
    let response = client
        .get(&ResourcePath::new("products"), &filters, false)
        .await
        .unwrap();
    let body = response.json().unwrap();
    assert_eq!(body["current_page"], 1);
    assert!(body["_links"]["next"].is_object());
}

#[tokio::test]
async fn test_get_all_pages_merges_items() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server).await;
    let url = server.url();
    let first = server
        .mock("GET", "/api/rest/v1/products")
        .match_query(Matcher::Exact("limit=2".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(collection(&url, &["a", "b"], Some("search_after=b&limit=2")))
        .create_async()
        .await;
    let second = server
        .mock("GET", "/api/rest/v1/products")
        .match_query(Matcher::Exact("search_after=b&limit=2".to_string()))
        .match_header("authorization", "Bearer AT1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(collection(&url, &["c"], None))
        .create_async()
        .await;

    let response = client
        .get(
            &ResourcePath::new("products"),
            &Filters::new().with("limit", 2),
            true,
        )
        .await
        .unwrap();

    assert_json_eq!(
        response.json().unwrap().clone(),
        json!({"_embedded": {"items": [
            {"identifier": "a"},
            {"identifier": "b"},
            {"identifier": "c"}
        ]}})
    );
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_get_next_page() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server).await;
    let url = server.url();
    server
        .mock("GET", "/api/rest/v1/products")
        .match_query(Matcher::Exact("page=2".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(collection(&url, &["b"], None))
        .create_async()
        .await;

    let first = akeneo_cli::model::http::ApiResponse {
        status: reqwest::StatusCode::OK,
        headers: reqwest::header::HeaderMap::new(),
        body: ResponseBody::Json(serde_json::from_str(&collection(&url, &["a"], Some("page=2"))).unwrap()),
    };
    let second = client.get_next_page(&first).await.unwrap().unwrap();
    assert_eq!(second.json().unwrap()["_embedded"]["items"][0]["identifier"], "b");
    assert!(client.get_next_page(&second).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_unknown_resource() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server).await;
    server
        .mock("GET", "/api/rest/v1/products/UNKNOWN")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(json!({"code": 404, "message": "Resource not found"}).to_string())
        .create_async()
        .await;

    let err = client
        .get(&ResourcePath::new("products").code("UNKNOWN"), &Filters::new(), false)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    let request_error = err.request_error().unwrap();
    assert_eq!(request_error.method, reqwest::Method::GET);
    assert!(request_error.url.ends_with("/api/rest/v1/products/UNKNOWN"));
    assert_eq!(
        request_error.response_body,
        ResponseBody::Json(json!({"code": 404, "message": "Resource not found"}))
    );
}

#[tokio::test]
async fn test_post_sends_json() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server).await;
    let create = server
        .mock("POST", "/api/rest/v1/products")
        .match_header("content-type", "application/json")
        .match_header("authorization", "Bearer AT1")
        .match_body(Matcher::Json(json!({"identifier": "SKU-1", "enabled": true})))
        .with_status(201)
        .with_header("location", "/api/rest/v1/products/SKU-1")
        .create_async()
        .await;

    let response = client
        .post(
            &ResourcePath::new("products"),
            json!({"identifier": "SKU-1", "enabled": true}),
        )
        .await
        .unwrap();
    assert_eq!(response.status.as_u16(), 201);
    create.assert_async().await;
}

#[tokio::test]
async fn test_patch_validation_error_keeps_request_body() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server).await;
    server
        .mock("PATCH", "/api/rest/v1/products/SKU-1")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(json!({"code": 422, "message": "Validation failed."}).to_string())
        .create_async()
        .await;

    let err = client
        .patch(
            &ResourcePath::new("products").code("SKU-1"),
            json!({"family": "unknown"}),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Request(_)));
    let rendered = err.to_string();
    assert!(rendered.starts_with("ERROR 422 PATCH"));
    assert!(rendered.contains(r#"Data sent : {"family":"unknown"}"#));
}

#[tokio::test]
async fn test_delete_returns_empty_body() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server).await;
    let delete = server
        .mock("DELETE", "/api/rest/v1/products/SKU-1")
        .match_body(Matcher::Exact(String::new()))
        .with_status(204)
        .with_header("content-type", "application/json")
        .create_async()
        .await;

    let response = client
        .delete(&ResourcePath::new("products").code("SKU-1"))
        .await
        .unwrap();
    assert_eq!(response.body, ResponseBody::Empty);
    delete.assert_async().await;
}

#[tokio::test]
async fn test_bulk_sends_ndjson() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server).await;
    let answer = "{\"line\":1,\"identifier\":\"a\",\"status_code\":204}\n{\"line\":2,\"identifier\":\"b\",\"status_code\":201}";
    let bulk = server
        .mock("PATCH", "/api/rest/v1/products")
        .match_header("content-type", "application/vnd.akeneo.collection+json")
        .match_body(Matcher::Exact(
            "{\"identifier\":\"a\"}\n{\"identifier\":\"b\"}\n".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/vnd.akeneo.collection+json")
        .with_body(answer)
        .create_async()
        .await;

    let response = client
        .bulk(
            &ResourcePath::new("products"),
            &[json!({"identifier": "a"}), json!({"identifier": "b"})],
        )
        .await
        .unwrap();
    assert_eq!(response.body.as_text(), Some(answer));
    bulk.assert_async().await;
}

#[tokio::test]
async fn test_upload_asset_file() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server).await;
    let upload = server
        .mock("POST", "/api/rest/v1/asset-media-files")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="notes.txt""#.to_string()),
            Matcher::Regex("application/octet-stream".to_string()),
            Matcher::Regex("plain text content".to_string()),
        ]))
        .with_status(201)
        .with_header("asset-media-file-code", "a/b/c/notes.txt")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"plain text content")
        .unwrap();

    let response = client.upload_asset_file(&path).await.unwrap();
    assert_eq!(response.status.as_u16(), 201);
    assert_eq!(
        response.headers.get("asset-media-file-code").unwrap(),
        "a/b/c/notes.txt"
    );
    upload.assert_async().await;
}

#[tokio::test]
async fn test_upload_product_file() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server).await;
    let upload = server
        .mock("POST", "/api/rest/v1/media-files")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="product""#.to_string()),
            Matcher::Regex(r#""identifier":"SKU-1""#.to_string()),
            Matcher::Regex(r#""attribute":"notice""#.to_string()),
        ]))
        .with_status(201)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notice.txt");
    std::fs::write(&path, "notice").unwrap();

    let request = ProductFileUpload {
        identifier: "SKU-1".to_string(),
        attribute: "notice".to_string(),
        file: path,
        locale: None,
        scope: None,
        is_model: false,
    };
    client.upload_product_file(&request).await.unwrap();
    upload.assert_async().await;
}

#[tokio::test]
async fn test_upload_missing_file() {
    let mut server = Server::new_async().await;
    let client = logged_in(&mut server).await;
    let result = client
        .upload_asset_file(std::path::Path::new("/nonexistent/akeneo/picture.png"))
        .await;
    assert!(matches!(result, Err(AppError::Io(_))));
}
