#![allow(dead_code)]

use std::sync::Arc;

use reqwest::Client;

use fba_chat_gateway::config::GatewayConfig;
use fba_chat_gateway::gateway::ForwardingGateway;
use fba_chat_gateway::usage::UsageSink;

pub const TEST_API_KEY: &str = "test-key";

pub fn create_test_config(base_url: String) -> GatewayConfig {
    GatewayConfig {
        upstream_url: base_url,
        ..GatewayConfig::default()
    }
    .with_api_key(TEST_API_KEY)
}

pub fn create_gateway(config: GatewayConfig) -> Arc<ForwardingGateway> {
    Arc::new(ForwardingGateway::new(Client::new(), Arc::new(config)))
}

pub fn create_gateway_with_sink(
    config: GatewayConfig,
    sink: Arc<dyn UsageSink>,
) -> Arc<ForwardingGateway> {
    Arc::new(ForwardingGateway::with_sink(
        Client::new(),
        Arc::new(config),
        sink,
    ))
}
