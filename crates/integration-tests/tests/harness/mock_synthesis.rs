//! Mock long-audio synthesis backend for integration tests
//!
//! Answers `:synthesizeLongAudio` submissions with a long-running operation
//! and serves the matching poll endpoint, with configurable outcomes.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

const OPERATION_NAME: &str = "projects/test-project/locations/us-central1/operations/op-1";

/// How the mock backend resolves a submitted operation
pub enum Behavior {
    /// Operation completes immediately
    Done,
    /// Operation stays pending until the n-th poll
    PendingFor(u32),
    /// Operation finishes with an error status
    Fail(String),
    /// Operation never completes
    NeverDone,
    /// Submission itself is rejected with an HTTP error
    Reject(u16, String),
}

pub struct MockSynthesis {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    behavior: Behavior,
    submit_count: AtomicU32,
    poll_count: AtomicU32,
    last_request: Mutex<Option<Value>>,
}

impl MockSynthesis {
    /// Start a backend whose operations complete on submission
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(Behavior::Done).await
    }

    /// Start a backend that needs `polls` polls before completing
    pub async fn start_pending(polls: u32) -> anyhow::Result<Self> {
        Self::start_with(Behavior::PendingFor(polls)).await
    }

    /// Start a backend whose operations fail with the given message
    pub async fn start_failing(message: &str) -> anyhow::Result<Self> {
        Self::start_with(Behavior::Fail(message.to_owned())).await
    }

    /// Start a backend whose operations never finish
    pub async fn start_never_done() -> anyhow::Result<Self> {
        Self::start_with(Behavior::NeverDone).await
    }

    /// Start a backend that rejects submissions outright
    pub async fn start_rejecting(status: u16, message: &str) -> anyhow::Result<Self> {
        Self::start_with(Behavior::Reject(status, message.to_owned())).await
    }

    async fn start_with(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            behavior,
            submit_count: AtomicU32::new(0),
            poll_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        });

        // The submission path mixes a literal into the final segment
        // (`{location}:synthesizeLongAudio`), so route matching is manual
        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of synthesis submissions received
    pub fn submit_count(&self) -> u32 {
        self.state.submit_count.load(Ordering::SeqCst)
    }

    /// Number of operation polls received
    pub fn poll_count(&self) -> u32 {
        self.state.poll_count.load(Ordering::SeqCst)
    }

    /// Body of the most recent submission
    pub fn last_request(&self) -> Option<Value> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockSynthesis {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle(State(state): State<Arc<MockState>>, request: Request) -> axum::response::Response {
    let path = request.uri().path().to_owned();

    if path.ends_with(":synthesizeLongAudio") {
        let bytes = axum::body::to_bytes(request.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        *state.last_request.lock().unwrap() = Some(body);
        state.submit_count.fetch_add(1, Ordering::SeqCst);

        return match &state.behavior {
            Behavior::Reject(status, message) => {
                (StatusCode::from_u16(*status).unwrap(), message.clone()).into_response()
            }
            Behavior::Done => Json(operation(true, None)).into_response(),
            Behavior::Fail(message) => Json(operation(true, Some(message))).into_response(),
            Behavior::PendingFor(_) | Behavior::NeverDone => Json(operation(false, None)).into_response(),
        };
    }

    if path.contains("/operations/") {
        let polls = state.poll_count.fetch_add(1, Ordering::SeqCst) + 1;

        return match &state.behavior {
            Behavior::PendingFor(n) if polls >= *n => Json(operation(true, None)).into_response(),
            Behavior::PendingFor(_) | Behavior::NeverDone => Json(operation(false, None)).into_response(),
            Behavior::Fail(message) => Json(operation(true, Some(message))).into_response(),
            Behavior::Done | Behavior::Reject(..) => Json(operation(true, None)).into_response(),
        };
    }

    StatusCode::NOT_FOUND.into_response()
}

fn operation(done: bool, error: Option<&String>) -> Value {
    let mut value = json!({ "name": OPERATION_NAME, "done": done });
    if let Some(message) = error {
        value["error"] = json!({ "code": 13, "message": message });
    }
    value
}
