use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use hooksubmit::config::{Config, Identity};

pub const REGISTER_PATH: &str = "/hiring/generateWebhook/JAVA";
pub const SUBMIT_PATH: &str = "/hiring/testWebhook/JAVA";

/// A request the mock service received.
#[derive(Debug, Clone)]
pub struct Captured {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

/// What the mock registration endpoint answers with. `{webhook}` in the body
/// is replaced by the mock's own submission URL.
#[derive(Clone)]
pub struct Script {
    pub register_status: StatusCode,
    pub register_body: String,
    pub submit_status: StatusCode,
    pub submit_body: String,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            register_status: StatusCode::OK,
            register_body: r#"{"webhook":"{webhook}","accessToken":"abc123"}"#.to_string(),
            submit_status: StatusCode::OK,
            submit_body: r#"{"success":true}"#.to_string(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    script: Script,
    webhook_url: String,
    registrations: Arc<Mutex<Vec<Captured>>>,
    submissions: Arc<Mutex<Vec<Captured>>>,
}

/// A running mock challenge service.
pub struct MockService {
    pub addr: SocketAddr,
    registrations: Arc<Mutex<Vec<Captured>>>,
    submissions: Arc<Mutex<Vec<Captured>>>,
}

impl MockService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn registrations(&self) -> Vec<Captured> {
        self.registrations.lock().unwrap().clone()
    }

    pub fn submissions(&self) -> Vec<Captured> {
        self.submissions.lock().unwrap().clone()
    }

    /// Config pointing at this mock, with the given registration id.
    pub fn config(&self, reg_no: &str) -> Config {
        Config {
            identity: Identity {
                name: "Jane Doe".to_string(),
                reg_no: reg_no.to_string(),
                email: "jane@example.com".to_string(),
            },
            registration_url: self.url(REGISTER_PATH),
            http_timeout: Duration::from_secs(5),
            log_level: "warn".to_string(),
        }
    }
}

/// Spawn the mock service on a random local port.
pub async fn spawn_mock(script: Script) -> MockService {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    let registrations = Arc::new(Mutex::new(Vec::new()));
    let submissions = Arc::new(Mutex::new(Vec::new()));

    let state = MockState {
        script,
        webhook_url: format!("http://{addr}{SUBMIT_PATH}"),
        registrations: registrations.clone(),
        submissions: submissions.clone(),
    };

    let app = Router::new()
        .route(REGISTER_PATH, post(register))
        .route(SUBMIT_PATH, post(submit))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock server failed");
    });

    MockService {
        addr,
        registrations,
        submissions,
    }
}

async fn register(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    state
        .registrations
        .lock()
        .unwrap()
        .push(capture(&headers, body));

    let body = state
        .script
        .register_body
        .replace("{webhook}", &state.webhook_url);
    (state.script.register_status, body)
}

async fn submit(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    state.submissions.lock().unwrap().push(capture(&headers, body));
    (state.script.submit_status, state.script.submit_body.clone())
}

fn capture(headers: &HeaderMap, body: Value) -> Captured {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Captured {
        authorization: header("authorization"),
        content_type: header("content-type"),
        body,
    }
}

/// A local port with nothing listening on it.
pub fn closed_port_url(path: &str) -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{path}")
}

/// Webhook that answers 200 with a `Content-Length` it never delivers, then hangs up.
pub async fn spawn_truncating_webhook() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept failed");

        // Drain the request: headers, then the JSON body ending in '}'.
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            let headers_done = request.windows(4).any(|w| w == b"\r\n\r\n");
            if headers_done && request.ends_with(b"}") {
                break;
            }
        }

        let _ = stream
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 100\r\n\r\n{\"partial\":")
            .await;
        let _ = stream.shutdown().await;
    });

    format!("http://{addr}{SUBMIT_PATH}")
}
