use akeneo_cli::application::config::{Config, Credentials};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

pub const BASIC_AUTH: &str = "Basic Y2xpZW50OnNlY3JldA==";

pub fn test_config(server_url: &str) -> Config {
    Config::new(
        server_url,
        Credentials {
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
            username: "admin".to_string(),
            password: "admin_password".to_string(),
        },
    )
}

pub fn token_body(access_token: &str, refresh_token: &str, expires_in: i64) -> String {
    json!({
        "access_token": access_token,
        "refresh_token": refresh_token,
        "expires_in": expires_in,
        "token_type": "bearer",
        "scope": null
    })
    .to_string()
}

/// Mocks the password grant, answering with `AT1`/`RT1` valid for an hour
pub async fn mock_login(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/api/oauth/v1/token")
        .match_header("authorization", BASIC_AUTH)
        .match_body(Matcher::PartialJson(json!({
            "grant_type": "password",
            "username": "admin",
            "password": "admin_password"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body("AT1", "RT1", 3600))
        .create_async()
        .await
}
