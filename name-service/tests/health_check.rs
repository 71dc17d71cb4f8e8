//! End-to-end tests: the real binary wiring (config, Gemini provider,
//! router) served on a random port, with Gemini replaced by a local stub.

mod common;

use common::{spawn_stub_gemini, StubReply, TEST_API_KEY};
use name_service::config::NameServiceConfig;
use name_service::startup::Application;
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Mutex;
use std::time::Duration;

/// Serializes environment mutation between tests in this binary.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn load_config(gemini_base_url: &str) -> NameServiceConfig {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    std::env::set_var("APP__PORT", "0"); // Random port
    std::env::set_var("GEMINI_API_KEY", TEST_API_KEY);
    std::env::set_var("GEMINI_MODEL", "gemini-1.5-flash");
    std::env::set_var("GEMINI_API_BASE", gemini_base_url);
    std::env::set_var("GEMINI_TIMEOUT_SECS", "5");

    NameServiceConfig::load().expect("Failed to load config")
}

/// Spawn the application on a random port and return the port number.
async fn spawn_app(reply: StubReply) -> u16 {
    let stub = spawn_stub_gemini(reply).await;
    let config = load_config(&stub.base_url);

    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app(StubReply::Text("山（サン）")).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "name-service");
}

#[tokio::test]
async fn generate_name_round_trips_through_gemini() {
    let port = spawn_app(StubReply::Text("山（サン）\n")).await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/api/generate-name", port))
        .json(&json!({"name": "山田太郎"}))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({"new_name": "山（サン）"}));
}

#[tokio::test]
async fn gemini_outage_is_reported_as_500() {
    let port = spawn_app(StubReply::Status(
        reqwest::StatusCode::SERVICE_UNAVAILABLE,
        "The model is overloaded",
    ))
    .await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/api/generate-name", port))
        .json(&json!({"name": "伊藤さくら"}))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "名前の生成中にサーバーエラーが発生しました。");
    assert!(!body.to_string().contains("overloaded"));
}
