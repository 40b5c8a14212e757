use std::fmt;

use actix_web::http::StatusCode;

use crate::consts;

#[derive(Debug, Clone)]
pub enum GatewayError {
    MethodNotAllowed,
    ConfigurationError(String),
    UpstreamError { status: u16, body: String },
    PayloadTooLarge(String),
    InternalFault(String),
}

impl GatewayError {
    pub fn missing_api_key() -> Self {
        GatewayError::ConfigurationError(consts::API_KEY_NOT_CONFIGURED.to_string())
    }

    pub fn payload_too_large(limit: usize) -> Self {
        GatewayError::PayloadTooLarge(format!("Request body exceeds {limit} bytes"))
    }

    /// Status returned to the browser. Upstream statuses pass through untouched.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::UpstreamError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            GatewayError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::InternalFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the `error` field of the response body.
    pub fn client_message(&self) -> &str {
        match self {
            GatewayError::MethodNotAllowed => consts::METHOD_NOT_ALLOWED,
            GatewayError::ConfigurationError(msg) => msg.as_str(),
            GatewayError::UpstreamError { body, .. } => body.as_str(),
            GatewayError::PayloadTooLarge(msg) => msg.as_str(),
            GatewayError::InternalFault(msg) => msg.as_str(),
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::MethodNotAllowed => write!(f, "Method not allowed"),
            GatewayError::ConfigurationError(msg) => write!(f, "Config error: {}", msg),
            GatewayError::UpstreamError { status, body } => {
                write!(f, "Upstream error: status {}, body {}", status, body)
            }
            GatewayError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            GatewayError::InternalFault(msg) => write!(f, "Internal fault: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::InternalFault(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::InternalFault(err.to_string())
    }
}

impl From<std::io::Error> for GatewayError {
    fn from(err: std::io::Error) -> Self {
        GatewayError::ConfigurationError(err.to_string())
    }
}
