//! Stub Gemini API served on a random local port.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "test-api-key";

/// Canned reply of the stub.
#[derive(Clone)]
pub enum StubReply {
    Text(&'static str),
    Status(StatusCode, &'static str),
    Raw(Value),
}

#[derive(Clone, Default)]
pub struct Recorded {
    pub path: Option<String>,
    pub api_key: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct StubState {
    reply: StubReply,
    recorded: Arc<Mutex<Recorded>>,
}

pub struct StubGemini {
    pub base_url: String,
    recorded: Arc<Mutex<Recorded>>,
}

impl StubGemini {
    pub fn recorded(&self) -> Recorded {
        self.recorded.lock().unwrap().clone()
    }
}

pub fn candidate_json(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 300, "candidatesTokenCount": 5, "totalTokenCount": 305}
    })
}

async fn generate_content(
    State(state): State<StubState>,
    Path(model_method): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    {
        let mut recorded = state.recorded.lock().unwrap();
        recorded.path = Some(model_method);
        recorded.api_key = headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        recorded.body = Some(body);
    }

    match state.reply {
        StubReply::Text(text) => (StatusCode::OK, Json(candidate_json(text))),
        StubReply::Status(status, message) => {
            (status, Json(json!({"error": {"code": status.as_u16(), "message": message}})))
        }
        StubReply::Raw(value) => (StatusCode::OK, Json(value)),
    }
}

/// Start a stub that answers every `generateContent` call with `reply`.
pub async fn spawn_stub_gemini(reply: StubReply) -> StubGemini {
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let state = StubState {
        reply,
        recorded: recorded.clone(),
    };

    let app = Router::new()
        .route("/v1beta/models/:model_method", post(generate_content))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    StubGemini {
        base_url: format!("http://127.0.0.1:{}/v1beta", port),
        recorded,
    }
}
