// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_lookup::config::Config;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Token the mock API accepts.
pub const TEST_TOKEN: &str = "test-token";

/// Canned response served by the mock activities API.
pub struct MockApi {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockApi {
    /// Number of requests that reached the activities endpoint.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

struct MockState {
    status: StatusCode,
    body: String,
    hits: Arc<AtomicUsize>,
}

async fn list_activities(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let expected = format!("Bearer {}", TEST_TOKEN);
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);
    if !authorized {
        return (StatusCode::UNAUTHORIZED, r#"{"success":false,"message":"invalid token"}"#)
            .into_response();
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
        .into_response()
}

/// Start a mock activities API on an ephemeral port.
#[allow(dead_code)]
pub async fn spawn_mock_api(status: StatusCode, body: impl Into<String>) -> MockApi {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = Arc::new(MockState {
        status,
        body: body.into(),
        hits: hits.clone(),
    });

    let app = Router::new()
        .route("/api/activities", get(list_activities))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        base_url: format!("http://{}/api", addr),
        hits,
    }
}

/// Mock API serving a successful envelope around `activities`.
#[allow(dead_code)]
pub async fn spawn_with_activities(activities: Vec<Value>) -> MockApi {
    let body = json!({
        "success": true,
        "message": "ok",
        "data": { "activities": activities }
    });
    spawn_mock_api(StatusCode::OK, body.to_string()).await
}

/// JSON for one activity record.
#[allow(dead_code)]
pub fn activity_json(id: &str, sequence_number: Option<i64>, title: &str) -> Value {
    json!({
        "id": id,
        "sequence_number": sequence_number,
        "title": title,
        "description": format!("About {}", title),
        "current_participants": 5,
        "max_participants": 30,
        "status": "published"
    })
}

/// Config pointing at `base_url` with the given token and target.
#[allow(dead_code)]
pub fn test_config(base_url: &str, token: &str, target: i64) -> Config {
    let base_url = base_url.to_string();
    let token = token.to_string();
    let target = target.to_string();
    Config::from_vars(|name| match name {
        "ACTIVITIES_API_URL" => Some(base_url.clone()),
        "ACTIVITIES_API_TOKEN" => Some(token.clone()),
        "ACTIVITY_SEQUENCE" => Some(target.clone()),
        _ => None,
    })
    .expect("Test config should load")
}
