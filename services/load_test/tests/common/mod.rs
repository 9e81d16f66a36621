#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use action_hub::{attach, ExecuteHeaders, ExecuteRequest, EXECUTE_PATH};
use action_hub_load_test::LoadTestConfig;
use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    Router,
};
use reqwest::Client;
use tokio::net::TcpListener;

pub const API_KEY: &str = "load-test-api-key";
pub const SIMULATED_DOWNLOAD_URL: &str = "https://downloads.example.com/simulated/query.json";

/// A request as the stub hub saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Request body is not JSON")
    }
}

#[derive(Clone)]
struct StubState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    status: StatusCode,
    body: &'static str,
}

/// In-process Action Hub that records every request and always answers
/// with the same status and body.
pub struct StubActionHub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubActionHub {
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            requests: Arc::clone(&requests),
            status,
            body,
        };

        let app = Router::new().fallback(record).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub action hub");
        let addr = listener.local_addr().expect("Stub action hub has no address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Stub action hub stopped");
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(axum::http::HeaderName, &'static str); 1], &'static str) {
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    });

    (state.status, [(CONTENT_TYPE, "application/json")], state.body)
}

pub fn test_config() -> LoadTestConfig {
    LoadTestConfig {
        simulated_download_url: SIMULATED_DOWNLOAD_URL.to_string(),
        api_key: API_KEY.to_string(),
        wait_time: Duration::ZERO,
    }
}

/// Sends one execute request to `base_url` outside of goose.
pub async fn send_execute(base_url: &str) -> reqwest::Response {
    let headers = ExecuteHeaders::new(API_KEY).expect("Invalid test API key");
    let request = ExecuteRequest::query(SIMULATED_DOWNLOAD_URL);

    attach(
        Client::new().post(format!("{}{}", base_url, EXECUTE_PATH)),
        &request,
        &headers,
    )
    .send()
    .await
    .expect("Failed to send request")
}

/// Checks everything the hub should see on an execute request.
pub fn assert_execute_request(request: &RecordedRequest) {
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, EXECUTE_PATH);
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("user-agent"), Some("looker-actions-load-test/0.1"));
    assert_eq!(
        request.header("x-looker-instance"),
        Some("looker-actions-load-test-simulation")
    );
    assert_eq!(
        request.header("x-looker-webhook-id"),
        Some("looker-actions-load-test-simulation")
    );
    assert_eq!(
        request.header("authorization"),
        Some(format!("Token token=\"{}\"", API_KEY).as_str())
    );
    assert_eq!(
        request.json(),
        serde_json::json!({
            "type": "query",
            "form_params": {
                "sleep": 0,
                "simulated_download_url": SIMULATED_DOWNLOAD_URL
            }
        })
    );
}
