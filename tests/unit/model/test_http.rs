use akeneo_cli::error::AppError;
use akeneo_cli::model::http::{RequestBody, RequestDescriptor, ResponseBody, make_http_request};
use akeneo_cli::model::upload::UploadForm;
use mockito::{Matcher, Server};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde_json::json;
use url::Url;

fn url(server_url: &str, path: &str) -> Url {
    Url::parse(&format!("{server_url}{path}")).unwrap()
}

#[tokio::test]
async fn test_json_with_charset_is_decoded() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/families")
        .with_status(200)
        .with_header("content-type", "application/json; charset=utf-8")
        .with_body(r#"{"code":"shoes"}"#)
        .create_async()
        .await;

    let request = RequestDescriptor::new(Method::GET, url(&server.url(), "/families"));
    let response = make_http_request(&Client::new(), request).await.unwrap();
    assert_eq!(response.body, ResponseBody::Json(json!({"code": "shoes"})));
}

#[tokio::test]
async fn test_non_json_body_is_returned_raw() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/export.csv")
        .with_status(200)
        .with_header("content-type", "text/csv")
        .with_body("code;label\nshoes;Shoes\n")
        .create_async()
        .await;

    let request = RequestDescriptor::new(Method::GET, url(&server.url(), "/export.csv"));
    let response = make_http_request(&Client::new(), request).await.unwrap();
    assert_eq!(response.body.as_text(), Some("code;label\nshoes;Shoes\n"));
}

#[tokio::test]
async fn test_broken_json_falls_back_to_text() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/broken")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{truncated")
        .create_async()
        .await;

    let request = RequestDescriptor::new(Method::GET, url(&server.url(), "/broken"));
    let response = make_http_request(&Client::new(), request).await.unwrap();
    assert_eq!(response.body, ResponseBody::Text("{truncated".to_string()));
}

#[tokio::test]
async fn test_text_body_sent_verbatim() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/collection")
        .match_header("content-type", "application/vnd.akeneo.collection+json")
        .match_body(Matcher::Exact("raw line\n".to_string()))
        .with_status(200)
        .create_async()
        .await;

    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/vnd.akeneo.collection+json"),
    );
    let request = RequestDescriptor::new(Method::PATCH, url(&server.url(), "/collection"))
        .with_headers(headers)
        .with_body(RequestBody::Text("raw line\n".to_string()));
    make_http_request(&Client::new(), request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_sensitive_body_is_redacted() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/token")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code":401,"message":"Unauthorized"}"#)
        .create_async()
        .await;

    let request = RequestDescriptor::new(Method::POST, url(&server.url(), "/token"))
        .with_body(RequestBody::Json(json!({"password": "hunter2"})))
        .sensitive();
    let err = make_http_request(&Client::new(), request)
        .await
        .unwrap_err();
    let request_error = err.request_error().unwrap();
    assert_eq!(request_error.request_body.as_deref(), Some("<redacted>"));
    assert!(!err.to_string().contains("hunter2"));
}

#[tokio::test]
async fn test_form_body_needs_multipart() {
    let server = Server::new_async().await;
    let request = RequestDescriptor::new(Method::POST, url(&server.url(), "/media-files"))
        .with_body(RequestBody::Form(UploadForm::new("/tmp/picture.png")));
    assert!(matches!(
        make_http_request(&Client::new(), request).await,
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_content_type_strips_parameters() {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("multipart/form-data; boundary=xyz"),
    );
    let request = RequestDescriptor::new(
        Method::POST,
        Url::parse("https://pim.example.com/api/rest/v1/media-files").unwrap(),
    )
    .with_headers(headers);
    assert_eq!(request.content_type(), Some("multipart/form-data"));
}

#[test]
fn test_decode_empty_json() {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    assert_eq!(
        ResponseBody::decode(&headers, String::new()),
        ResponseBody::Empty
    );
}
