//! In-process stand-in for the remote retail API.
//!
//! Every request is recorded (method, path, identity header, JSON body) and
//! answered with a canned response registered by the test, or `200` with an
//! empty body when nothing was registered.

use api_client::ApiClient;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const EMAIL_HEADER: &str = "loggedinemail";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub logged_in_email: Option<String>,
    pub body: Option<Value>,
}

type Canned = HashMap<(String, String), (u16, String)>;

#[derive(Clone, Default)]
struct StubState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    responses: Arc<Mutex<Canned>>,
}

pub struct StubApi {
    pub base_url: String,
    state: StubState,
}

impl StubApi {
    /// Bind an ephemeral port and serve until the test's runtime shuts down.
    pub async fn start() -> Self {
        let state = StubState::default();
        let router = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let addr = listener.local_addr().expect("Stub listener has no address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Stub server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Register the response for `method path`.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: impl Into<String>) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.into()));
    }

    pub fn respond_json(&self, method: &str, path: &str, status: u16, body: Value) {
        self.respond(method, path, status, body.to_string());
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The single recorded request. Panics if there were zero or several.
    pub fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests[0].clone()
    }

    /// Anonymous client, as used for login.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone())
    }

    /// Client for a signed-in employee.
    pub fn session_client(&self, email: &str) -> ApiClient {
        self.client().with_logged_in_email(email)
    }
}

async fn handle(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let recorded = Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        logged_in_email: headers
            .get(EMAIL_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    };
    state.requests.lock().unwrap().push(recorded);

    let canned = state
        .responses
        .lock()
        .unwrap()
        .get(&(method.to_string(), uri.path().to_string()))
        .cloned();
    let (status, body) = canned.unwrap_or((200, String::new()));

    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}
