#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use donation_game_server::{api::app_router, build_state, config::Config};
use serde_json::Value;
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        event_bus_capacity: 16,
    }
}

pub async fn test_app() -> Router {
    let config = test_config();
    let state = build_state(&config).await.unwrap();
    app_router(state, &config).unwrap()
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

pub async fn create_goal(app: &Router, name: &str, item: &str, amount: i64) -> StatusCode {
    let body = serde_json::json!({ "name": name, "item": item, "amount": amount });
    send(app, "POST", "/api/v1/goals", Some(body)).await.0
}

pub async fn create_person(app: &Router, name: &str, goal_name: &str) -> StatusCode {
    let body = serde_json::json!({ "name": name, "goal_name": goal_name });
    send(app, "POST", "/api/v1/people", Some(body)).await.0
}

pub async fn create_game(app: &Router, name: &str, goal_name: &str) -> StatusCode {
    let body = serde_json::json!({ "name": name, "goal_name": goal_name });
    send(app, "POST", "/api/v1/games", Some(body)).await.0
}
