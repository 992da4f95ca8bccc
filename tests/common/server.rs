//! In-process collection manager.
//!
//! Runs an axum server on its own thread and runtime so tests can drive the
//! CLI with blocking `Command`s.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use prost::Message;
use tokio::sync::oneshot;

use sample_client::infrastructure::rpc::proto;

/// How the fake answers every publish call
#[derive(Debug, Clone)]
pub enum Reply {
    Digest(String),
    /// Error status with a protobuf `Status` body
    Status { http: u16, code: i32, message: String },
    /// Error status with a plain text body
    Text { http: u16, body: String },
}

struct ServerState {
    reply: Reply,
    requests: Mutex<Vec<proto::PublishRequest>>,
}

pub struct FakeServer {
    addr: SocketAddr,
    state: Arc<ServerState>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl FakeServer {
    pub fn start(reply: Reply) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        listener.set_nonblocking(true).expect("Failed to set nonblocking");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let state = Arc::new(ServerState {
            reply,
            requests: Mutex::new(Vec::new()),
        });
        let (tx, rx) = oneshot::channel::<()>();

        let app = Router::new()
            .route(&proto::method_path(proto::PUBLISH_CONTENT), post(publish))
            .with_state(state.clone());

        let thread = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build runtime");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("Failed to adopt listener");
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = rx.await;
                    })
                    .await
                    .expect("Fake server failed");
            });
        });

        Self {
            addr,
            state,
            shutdown: Some(tx),
            thread: Some(thread),
        }
    }

    /// `http://127.0.0.1:<port>`
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Bare `host:port`
    pub fn authority(&self) -> String {
        self.addr.to_string()
    }

    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<proto::PublishRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

async fn publish(State(state): State<Arc<ServerState>>, body: Bytes) -> Response {
    let request = match proto::PublishRequest::decode(body) {
        Ok(request) => request,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };
    state.requests.lock().unwrap().push(request);

    let protobuf = [(header::CONTENT_TYPE, proto::CONTENT_TYPE)];
    match &state.reply {
        Reply::Digest(digest) => (
            protobuf,
            proto::PublishResponse {
                digest: digest.clone(),
            }
            .encode_to_vec(),
        )
            .into_response(),
        Reply::Status {
            http,
            code,
            message,
        } => (
            status(*http),
            protobuf,
            proto::Status {
                code: *code,
                message: message.clone(),
            }
            .encode_to_vec(),
        )
            .into_response(),
        Reply::Text { http, body } => (status(*http), body.clone()).into_response(),
    }
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
