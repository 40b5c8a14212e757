use std::sync::Arc;
use std::time::Instant;

use actix_web::http::header::HeaderMap;
use actix_web::web::Bytes;
use serde_json::Value;

use crate::config::GatewayConfig;
use crate::consts;
use crate::errors::GatewayError;
use crate::models::request::{CompletionRequest, UpstreamRequest};
use crate::models::response::UpstreamUsage;
use crate::pricing::PricingTable;
use crate::upstream::UpstreamClient;
use crate::usage::{LogUsageSink, UsageRecord, UsageSink};

/// Holds the credential and forwards browser requests to the completion API.
pub struct ForwardingGateway {
    config: Arc<GatewayConfig>,
    upstream: UpstreamClient,
    pricing: PricingTable,
    sink: Arc<dyn UsageSink>,
}

impl ForwardingGateway {
    pub fn new(http_client: reqwest::Client, config: Arc<GatewayConfig>) -> Self {
        Self::with_sink(http_client, config, Arc::new(LogUsageSink))
    }

    pub fn with_sink(
        http_client: reqwest::Client,
        config: Arc<GatewayConfig>,
        sink: Arc<dyn UsageSink>,
    ) -> Self {
        let upstream = UpstreamClient::new(http_client, &config.upstream_url, &config.api_version);
        let pricing = PricingTable::new(&config.pricing);
        Self {
            config,
            upstream,
            pricing,
            sink,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    /// Telemetry label only. Never used for authorization.
    pub fn caller_identity(&self, headers: &HeaderMap) -> String {
        self.config
            .identity_header
            .as_deref()
            .and_then(|name| headers.get(name))
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(consts::ANONYMOUS_CALLER)
            .to_string()
    }

    /// Parses, forwards and accounts for one completion request.
    /// On success the upstream body is returned byte-for-byte.
    pub async fn complete(
        &self,
        body: &[u8],
        caller: &str,
        started: Instant,
    ) -> Result<Bytes, GatewayError> {
        let request: CompletionRequest = serde_json::from_slice(body)?;

        let Some(api_key) = self.config.api_key.as_ref() else {
            log::warn!("rejecting request from {caller}: api key not configured");
            return Err(GatewayError::missing_api_key());
        };

        let upstream_request = UpstreamRequest::from_completion(
            request,
            &self.config.default_model,
            self.config.default_max_tokens,
        );
        let message_count = upstream_request.message_count();

        if self.config.log_attempts {
            log::info!(
                "forwarding completion: caller={}, model={}, messages={}, api_key_present=true",
                caller,
                upstream_request.model,
                message_count
            );
        }

        let reply = match self.upstream.send_messages(api_key, &upstream_request).await {
            Ok(reply) => reply,
            Err(e) => {
                match &e {
                    GatewayError::UpstreamError { status, body } => {
                        log::error!("upstream returned status {status}: {body}")
                    }
                    other => log::error!("upstream call failed: {other}"),
                }
                return Err(e);
            }
        };

        if self.config.log_attempts {
            log::info!("upstream responded with status {}", reply.status);
        }

        let payload: Value = serde_json::from_slice(&reply.body)?;
        let usage = UpstreamUsage::from_payload(&payload);
        let estimated_cost =
            self.pricing
                .estimate(&upstream_request.model, usage.input(), usage.output());

        let record = UsageRecord::new(
            caller,
            &upstream_request.model,
            usage,
            estimated_cost,
            self.pricing.version(),
            started.elapsed(),
            message_count,
        );
        self.sink.record(&record);

        Ok(reply.body)
    }
}
