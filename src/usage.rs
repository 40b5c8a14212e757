use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consts;
use crate::models::response::UpstreamUsage;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UsageRecord {
    pub timestamp: DateTime<Utc>,
    pub caller_identity: String,
    pub model: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
    pub estimated_cost: f64,
    pub pricing_version: String,
    pub response_time_ms: u64,
    pub message_count: usize,
}

impl UsageRecord {
    pub fn new(
        caller_identity: &str,
        model: &str,
        usage: UpstreamUsage,
        estimated_cost: f64,
        pricing_version: &str,
        response_time: Duration,
        message_count: usize,
    ) -> Self {
        let input_tokens = usage.input();
        let output_tokens = usage.output();
        Self {
            timestamp: Utc::now(),
            caller_identity: caller_identity.to_string(),
            model: model.to_string(),
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
            estimated_cost,
            pricing_version: pricing_version.to_string(),
            response_time_ms: response_time.as_millis() as u64,
            message_count,
        }
    }
}

/// Destination for per-request usage telemetry.
pub trait UsageSink: Send + Sync {
    fn record(&self, record: &UsageRecord);
}

/// Writes each record as one JSON line under the `usage` log target.
pub struct LogUsageSink;

impl UsageSink for LogUsageSink {
    fn record(&self, record: &UsageRecord) {
        match serde_json::to_string(record) {
            Ok(line) => log::info!(target: consts::USAGE_LOG_TARGET, "{line}"),
            Err(e) => log::error!("failed to serialize usage record: {:?}", e),
        }
    }
}
