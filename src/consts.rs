pub const MESSAGES_PATH: &str = "/v1/messages";

pub const API_KEY_HEADER: &str = "x-api-key";
pub const API_VERSION_HEADER: &str = "anthropic-version";

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_API_VERSION: &str = "2023-06-01";
pub const DEFAULT_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_IDENTITY_HEADER: &str = "Cf-Access-Authenticated-User-Email";

pub const ANONYMOUS_CALLER: &str = "anonymous";

pub const API_KEY_NOT_CONFIGURED: &str = "API key not configured";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

pub const CHAT_ROUTE: &str = "/api/chat";

pub(crate) const CONNECT_TIMEOUT_SECS: u64 = 10;
pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 30;
pub(crate) const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;
pub(crate) const PREFLIGHT_MAX_AGE_SECS: u32 = 86_400;

pub(crate) const SERVER_BIND_ADDRESS: &str = "0.0.0.0";
pub(crate) const SERVER_PORT: u16 = 8080;

pub const CONFIG_FILE_ENV: &str = "GATEWAY_CONFIG_FILE";
pub(crate) const DEFAULT_CONFIG_FILE: &str = "./gateway.json";

pub const USAGE_LOG_TARGET: &str = "usage";
