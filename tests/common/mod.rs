// Stand-in for the Vision API, served on an ephemeral loopback port.
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::post,
};
use ocr_proxy::config::Config;
use ocr_proxy::routes::create_router;
use ocr_proxy::state::AppState;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const TEST_KEY: &str = "test-key";

#[derive(Clone)]
pub struct MockVision {
    pub url: String,
    calls: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<(HashMap<String, String>, Value)>>>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Arc<String>,
    calls: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<(HashMap<String, String>, Value)>>>,
}

impl MockVision {
    pub async fn json(reply: Value) -> Self {
        Self::raw(StatusCode::OK, reply.to_string()).await
    }

    pub async fn raw(status: StatusCode, body: impl Into<String>) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(Mutex::new(None));
        let state = MockState {
            status,
            body: Arc::new(body.into()),
            calls: calls.clone(),
            last: last.clone(),
        };

        let app = Router::new()
            .route("/annotate", post(annotate))
            .with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { url: format!("http://{}/annotate", addr), calls, last }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Query string and JSON body of the most recent call.
    pub fn last_request(&self) -> Option<(HashMap<String, String>, Value)> {
        self.last.lock().unwrap().clone()
    }
}

async fn annotate(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    state.calls.fetch_add(1, Ordering::SeqCst);
    *state.last.lock().unwrap() = Some((query, body));
    (
        state.status,
        [(CONTENT_TYPE, "application/json")],
        state.body.as_str().to_string(),
    )
}

pub fn config_for(endpoint: &str, api_key: Option<&str>) -> Config {
    Config {
        api_key: api_key.map(str::to_string),
        vision_endpoint: endpoint.to_string(),
        ..Config::default()
    }
}

pub fn app_for(config: Config) -> Router {
    let router = create_router(&config);
    router.with_state(Arc::new(AppState::new(config).unwrap()))
}

pub fn annotations(descriptions: &[&str]) -> Value {
    let items: Vec<Value> = descriptions
        .iter()
        .map(|d| serde_json::json!({ "locale": "zh", "description": d }))
        .collect();
    serde_json::json!({ "responses": [{ "textAnnotations": items }] })
}
