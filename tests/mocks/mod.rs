#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::Value;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use fba_chat_gateway::usage::{UsageRecord, UsageSink};

pub const MESSAGES_PATH: &str = "/v1/messages";

pub async fn setup_messages_mock(status: u16, body: Value) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_error_mock(status: u16, error_text: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(error_text))
        .mount(&mock_server)
        .await;

    mock_server
}

/// Fails verification on drop if the gateway makes any upstream call.
pub async fn setup_unreachable_mock() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    mock_server
}

#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<UsageRecord>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn records(&self) -> Vec<UsageRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl UsageSink for RecordingSink {
    fn record(&self, record: &UsageRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}
