use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::GatewayError;
use crate::pricing::{self, ModelPricing};

/// Upstream credential. Never printed, never serialized.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub max_age_secs: u32,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["POST".to_string(), "OPTIONS".to_string()],
            allowed_headers: vec!["Content-Type".to_string()],
            max_age_secs: consts::PREFLIGHT_MAX_AGE_SECS,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PricingConfig {
    pub version: String,
    pub models: HashMap<String, ModelPricing>,
    pub fallback: ModelPricing,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            version: pricing::PRICING_VERSION.to_string(),
            models: HashMap::new(),
            fallback: pricing::FALLBACK_PRICING,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GatewayConfig {
    pub bind_address: String,
    pub port: u16,
    pub upstream_url: String,
    pub api_version: String,
    pub api_key_env: String,
    #[serde(skip)]
    pub api_key: Option<ApiKey>,
    pub default_model: String,
    pub default_max_tokens: u32,
    pub identity_header: Option<String>,
    pub log_attempts: bool,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,
    pub cors: CorsConfig,
    pub pricing: PricingConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_address: consts::SERVER_BIND_ADDRESS.to_string(),
            port: consts::SERVER_PORT,
            upstream_url: consts::DEFAULT_UPSTREAM_URL.to_string(),
            api_version: consts::DEFAULT_API_VERSION.to_string(),
            api_key_env: consts::DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            default_model: consts::DEFAULT_MODEL.to_string(),
            default_max_tokens: consts::DEFAULT_MAX_TOKENS,
            identity_header: Some(consts::DEFAULT_IDENTITY_HEADER.to_string()),
            log_attempts: true,
            connect_timeout_secs: consts::CONNECT_TIMEOUT_SECS,
            request_timeout_secs: consts::REQUEST_TIMEOUT_SECS,
            max_body_bytes: consts::MAX_BODY_BYTES,
            cors: CorsConfig::default(),
            pricing: PricingConfig::default(),
        }
    }
}

impl GatewayConfig {
    pub fn from_json(config_str: &str) -> Result<Self, GatewayError> {
        serde_json::from_str(config_str)
            .map_err(|e| GatewayError::ConfigurationError(format!("invalid config: {e}")))
    }

    /// Looks up the credential by the configured variable name. Blank values count as absent.
    pub fn resolve_api_key<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key = lookup(&self.api_key_env)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(ApiKey::new);
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(ApiKey::new(api_key));
        self
    }

    pub fn validate(&self) -> Result<(), GatewayError> {
        reqwest::Url::parse(&self.upstream_url).map_err(|e| {
            GatewayError::ConfigurationError(format!(
                "invalid upstream_url {:?}: {e}",
                self.upstream_url
            ))
        })?;
        if self.default_model.trim().is_empty() {
            return Err(GatewayError::ConfigurationError(
                "default_model must not be empty".to_string(),
            ));
        }
        if self.default_max_tokens == 0 {
            return Err(GatewayError::ConfigurationError(
                "default_max_tokens must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<GatewayConfig, GatewayError>;
}

pub struct FileConfigLoader {
    path: PathBuf,
    required: bool,
}

impl FileConfigLoader {
    pub fn new(path: impl Into<PathBuf>, required: bool) -> Self {
        Self {
            path: path.into(),
            required,
        }
    }

    /// An explicitly configured file must exist; the default location is optional.
    pub fn from_env() -> Self {
        match std::env::var(consts::CONFIG_FILE_ENV) {
            Ok(path) => Self::new(path, true),
            Err(_) => Self::new(consts::DEFAULT_CONFIG_FILE, false),
        }
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self) -> Result<GatewayConfig, GatewayError> {
        let mut config = if self.path.exists() || self.required {
            let config_str = std::fs::read_to_string(&self.path).map_err(|e| {
                GatewayError::ConfigurationError(format!("{}: {e}", self.path.display()))
            })?;
            GatewayConfig::from_json(&config_str)?
        } else {
            log::info!(
                "config file {} not found, using defaults",
                self.path.display()
            );
            GatewayConfig::default()
        };

        config.resolve_api_key(|name| std::env::var(name).ok());
        config.validate()?;

        Ok(config)
    }
}

pub fn load_config() -> Result<GatewayConfig, GatewayError> {
    let loader = FileConfigLoader::from_env();
    loader.load_config()
}
