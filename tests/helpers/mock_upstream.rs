// ABOUTME: In-process mock of an OpenAI-compatible chat-completions endpoint
// ABOUTME: Serves scripted replies over real HTTP and records every request it receives

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Path the mock answers on
pub const CHAT_COMPLETIONS: &str = "/v1/chat/completions";

/// A request the mock received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Default)]
struct MockState {
    replies: Mutex<VecDeque<(u16, String)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Mock upstream bound to an ephemeral localhost port
pub struct MockUpstream {
    base_url: String,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockUpstream {
    /// Start serving on `127.0.0.1:0`
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route(CHAT_COMPLETIONS, post(handle_chat))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{address}"),
            state,
            handle,
        }
    }

    /// Full chat-completions URL
    pub fn url(&self) -> String {
        format!("{}{CHAT_COMPLETIONS}", self.base_url)
    }

    /// API base URL without the operation path
    pub fn base_url(&self) -> String {
        format!("{}/v1", self.base_url)
    }

    /// Queue a raw reply
    pub fn reply_raw(&self, status: u16, body: impl Into<String>) {
        self.state
            .replies
            .lock()
            .unwrap()
            .push_back((status, body.into()));
    }

    /// Queue a 200 reply whose message content is `content`
    pub fn reply_content(&self, content: &str) {
        let envelope = json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        });
        self.reply_raw(200, envelope.to_string());
    }

    /// Queue a 200 reply whose message content is the serialized `document`
    pub fn reply_document(&self, document: &Value) {
        self.reply_content(&document.to_string());
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle_chat(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        authorization: header_value("authorization"),
        content_type: header_value("content-type"),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    let (status, body) = state
        .replies
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((500, "no scripted reply".to_owned()));

    (StatusCode::from_u16(status).unwrap(), body)
}
