use std::sync::Arc;

use serde_json::json;

use crate::config::GatewayConfig;
use crate::gateway::ForwardingGateway;
use crate::models::request::CompletionRequest;

pub fn create_test_config(api_key: Option<&str>) -> GatewayConfig {
    let config = GatewayConfig {
        upstream_url: "http://127.0.0.1:9".to_string(),
        ..GatewayConfig::default()
    };
    match api_key {
        Some(key) => config.with_api_key(key),
        None => config,
    }
}

pub fn create_test_gateway(config: GatewayConfig) -> ForwardingGateway {
    ForwardingGateway::new(reqwest::Client::new(), Arc::new(config))
}

pub fn create_test_completion_request(user_message: &str) -> CompletionRequest {
    CompletionRequest {
        messages: Some(json!([{"role": "user", "content": user_message}])),
        system: Some(json!("")),
        max_tokens: None,
        model: None,
    }
}

pub fn create_test_request_body(user_message: &str) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "messages": [{"role": "user", "content": user_message}],
        "system": "",
        "max_tokens": 2000
    }))
    .unwrap()
}
