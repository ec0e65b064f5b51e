mod common;

use std::time::Duration;

use axum::{body::Body, http::Request};
use common::{create_goal, create_person, send, test_config};
use donation_game_server::{api::app_router, build_state};
use serde_json::json;
use tokio_stream::StreamExt;
use tower::ServiceExt;

#[tokio::test]
async fn mutations_reach_bus_subscribers() {
    let config = test_config();
    let state = build_state(&config).await.unwrap();
    let mut receiver = state.event_bus.subscribe();
    let app = app_router(state, &config).unwrap();

    assert_eq!(create_goal(&app, "Trees", "sapling", 100).await, 201);
    assert_eq!(create_person(&app, "Alice", "Trees").await, 201);
    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/donate",
        Some(json!({ "person_name": "Alice", "amount": 30 })),
    )
    .await;
    assert_eq!(status, 200);

    let goal_created = receiver.recv().await.unwrap();
    assert_eq!(goal_created.name, "goal:created");
    assert_eq!(goal_created.payload.unwrap()["goal_name"], "Trees");

    let person_created = receiver.recv().await.unwrap();
    assert_eq!(person_created.name, "person:created");

    let donation = receiver.recv().await.unwrap();
    assert_eq!(donation.name, "donation:made");
    let payload = donation.payload.unwrap();
    assert_eq!(payload["amount"], 30);
    assert_eq!(payload["goal_donations"], 30);
}

#[tokio::test]
async fn rejected_mutations_publish_nothing() {
    let config = test_config();
    let state = build_state(&config).await.unwrap();
    let mut receiver = state.event_bus.subscribe();
    let app = app_router(state, &config).unwrap();

    assert_eq!(create_person(&app, "Bob", "Ghost").await, 404);
    assert!(receiver.try_recv().is_err());
}

#[tokio::test]
async fn event_stream_delivers_goal_created() {
    let config = test_config();
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config).unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/events/stream")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    assert_eq!(create_goal(&app, "Trees", "sapling", 100).await, 201);

    let mut stream = response.into_body().into_data_stream();
    let chunk = tokio::time::timeout(Duration::from_secs(5), stream.next())
        .await
        .expect("no SSE frame before timeout")
        .unwrap()
        .unwrap();
    let frame = String::from_utf8(chunk.to_vec()).unwrap();
    assert!(frame.contains("event: goal:created"), "{frame}");
    assert!(frame.contains("\"goal_name\":\"Trees\""), "{frame}");
}
