use std::net::SocketAddr;

use tokio::net::TcpListener;

use mathagent::config::Config;
use mathagent::web::{build_router, AppState};

/// Start the server on a random port and return the address
async fn start_test_server(config: Config) -> SocketAddr {
    let app = build_router(AppState::from_config(&config));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_health_endpoint() {
    let addr = start_test_server(Config::default()).await;

    let response = reqwest::get(format!("http://{}/api/health", addr))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_form_uses_configured_defaults() {
    let mut config = Config::default();
    config.inputs.a = 97;
    config.inputs.b = 91;
    config.web.page_title = "Prime <Lab>".to_string();
    let addr = start_test_server(config).await;

    let body = reqwest::get(format!("http://{}/", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("<title>Prime &lt;Lab&gt;</title>"));
    assert!(body.contains("value=\"97\""));
    assert!(body.contains("value=\"91\""));
}

#[tokio::test]
async fn test_submit_form() {
    let addr = start_test_server(Config::default()).await;

    let response = reqwest::Client::new()
        .get(format!("http://{}/evaluate", addr))
        .query(&[("a", "97"), ("b", "91")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("97 * 91 = 8827"));
    assert!(body.contains("Is <strong>97</strong> prime? ✅ Yes"));
    assert!(body.contains("Is <strong>91</strong> prime? ❌ No"));
}

#[tokio::test]
async fn test_api_report_shape() {
    let addr = start_test_server(Config::default()).await;

    let response = reqwest::get(format!("http://{}/api/evaluate?a=7&b=10", addr))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let report: mathagent::Report = response.json().await.unwrap();
    assert_eq!(report, mathagent::evaluate(7, 10).unwrap());
}

#[tokio::test]
async fn test_api_rejects_bad_input() {
    let addr = start_test_server(Config::default()).await;

    let response = reqwest::get(format!("http://{}/api/evaluate?a=&b=10", addr))
        .await
        .unwrap();

    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Number A is required");
}

#[tokio::test]
async fn test_api_overflow() {
    let addr = start_test_server(Config::default()).await;

    let response = reqwest::get(format!(
        "http://{}/api/evaluate?a=4294967296&b=4294967296",
        addr
    ))
    .await
    .unwrap();

    assert_eq!(response.status(), 422);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["error"],
        "multiplication of 4294967296 and 4294967296 overflows a 64-bit integer"
    );
}

#[tokio::test]
async fn test_call_tool() {
    let addr = start_test_server(Config::default()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/api/tools/call", addr))
        .json(&serde_json::json!({
            "function": { "name": "subtract_numbers", "arguments": { "a": 7, "b": 10 } }
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["output"], "-3");
}
