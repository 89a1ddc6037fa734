//! Mock upstream implementing the two `OpenAI` endpoints Earshot calls

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// What the transcription endpoint answers
#[derive(Clone)]
pub enum Transcription {
    /// Fixed transcript
    Text(String),
    /// The uploaded bytes, read as UTF-8
    Echo,
    /// Error status with an `OpenAI` error body
    Fail(StatusCode, String),
}

/// What the chat completion endpoint answers
#[derive(Clone)]
pub enum Completion {
    /// Fixed first-choice content
    Text(String),
    /// `answer to <prompt>`
    Echo,
    /// Error status with an `OpenAI` error body
    Fail(StatusCode, String),
}

/// Mock `OpenAI` backend that returns predictable responses
pub struct MockOpenAi {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    transcription: Transcription,
    completion: Completion,
    transcription_count: AtomicU32,
    completion_count: AtomicU32,
    transcription_models: Mutex<Vec<String>>,
    completion_requests: Mutex<Vec<serde_json::Value>>,
}

impl MockOpenAi {
    /// Start the mock server, returning immediately
    pub async fn start(transcription: Transcription, completion: Completion) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            transcription,
            completion,
            transcription_count: AtomicU32::new(0),
            completion_count: AtomicU32::new(0),
            transcription_models: Mutex::new(Vec::new()),
            completion_requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/audio/transcriptions", routing::post(handle_transcription))
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

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

    /// Mock answering `transcript` then `answer`
    pub async fn answering(transcript: &str, answer: &str) -> anyhow::Result<Self> {
        Self::start(
            Transcription::Text(transcript.to_owned()),
            Completion::Text(answer.to_owned()),
        )
        .await
    }

    /// Base URL for configuring the mock as the upstream
    ///
    /// Includes `/v1` since the clients append paths like `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of transcription requests received
    pub fn transcription_count(&self) -> u32 {
        self.state.transcription_count.load(Ordering::Relaxed)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// `model` field of each transcription request
    pub fn transcription_models(&self) -> Vec<String> {
        self.state.transcription_models.lock().unwrap().clone()
    }

    /// JSON body of each completion request
    pub fn completion_requests(&self) -> Vec<serde_json::Value> {
        self.state.completion_requests.lock().unwrap().clone()
    }
}

impl Drop for MockOpenAi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": {
                "message": message,
                "type": "mock_error"
            }
        })),
    )
        .into_response()
}

async fn handle_transcription(State(state): State<Arc<MockState>>, mut multipart: Multipart) -> Response {
    state.transcription_count.fetch_add(1, Ordering::Relaxed);

    let mut model = String::new();
    let mut audio = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name() {
            Some("model") => model = field.text().await.unwrap_or_default(),
            Some("file") => audio = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default(),
            _ => {}
        }
    }

    state.transcription_models.lock().unwrap().push(model);

    let text = match &state.transcription {
        Transcription::Text(text) => text.clone(),
        Transcription::Echo => String::from_utf8_lossy(&audio).into_owned(),
        Transcription::Fail(status, message) => return error_response(*status, message),
    };

    Json(serde_json::json!({ "text": text })).into_response()
}

#[derive(Debug, Deserialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[allow(dead_code)]
    role: String,
    content: String,
}

async fn handle_chat_completions(
    State(state): State<Arc<MockState>>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state.completion_count.fetch_add(1, Ordering::Relaxed);
    state.completion_requests.lock().unwrap().push(body.clone());

    let request: ChatCompletionRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    let content = match &state.completion {
        Completion::Text(text) => text.clone(),
        Completion::Echo => format!(
            "answer to {}",
            request.messages.last().map(|m| m.content.as_str()).unwrap_or_default()
        ),
        Completion::Fail(status, message) => return error_response(*status, message),
    };

    Json(serde_json::json!({
        "id": "chatcmpl-test-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": request.model,
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            },
            {
                "index": 1,
                "message": {"role": "assistant", "content": "second choice is ignored"},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    }))
    .into_response()
}
