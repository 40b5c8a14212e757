use serde::{self, Deserialize, Serialize};
use serde_json::Value;

/// Body sent by the browser client. `messages` and `system` are opaque and
/// reach the completion API exactly as sent; the API judges their validity.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CompletionRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub messages: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub system: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model: Option<String>,
}

/// Body sent to the completion API.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpstreamRequest {
    pub model: String,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub system: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub messages: Option<Value>,
}

impl UpstreamRequest {
    /// Empty model names and a zero token budget fall back to the defaults.
    pub fn from_completion(
        request: CompletionRequest,
        default_model: &str,
        default_max_tokens: u32,
    ) -> Self {
        let model = request
            .model
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| default_model.to_string());
        let max_tokens = request
            .max_tokens
            .filter(|max_tokens| *max_tokens > 0)
            .unwrap_or(default_max_tokens);

        Self {
            model,
            max_tokens,
            system: request.system,
            messages: request.messages,
        }
    }

    /// Zero when `messages` is missing or not an array.
    pub fn message_count(&self) -> usize {
        self.messages
            .as_ref()
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::helpers::create_test_completion_request;
    use serde_json::json;

    fn parse(value: Value) -> CompletionRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let request = parse(json!({
            "messages": [{"role": "user", "content": "Hi"}],
            "system": "You are an FBA shipping assistant."
        }));

        let upstream = UpstreamRequest::from_completion(request, "default-model", 2000);
        assert_eq!(upstream.model, "default-model");
        assert_eq!(upstream.max_tokens, 2000);
        assert_eq!(
            upstream.system,
            Some(json!("You are an FBA shipping assistant."))
        );
        assert_eq!(upstream.message_count(), 1);
    }

    #[test]
    fn test_caller_values_win() {
        let mut request = create_test_completion_request("Hi");
        request.model = Some("claude-3-5-haiku-20241022".to_string());
        request.max_tokens = Some(512);

        let upstream = UpstreamRequest::from_completion(request, "default-model", 2000);
        assert_eq!(upstream.model, "claude-3-5-haiku-20241022");
        assert_eq!(upstream.max_tokens, 512);
    }

    #[test]
    fn test_empty_model_and_zero_tokens_fall_back() {
        let mut request = create_test_completion_request("Hi");
        request.model = Some(String::new());
        request.max_tokens = Some(0);

        let upstream = UpstreamRequest::from_completion(request, "default-model", 2000);
        assert_eq!(upstream.model, "default-model");
        assert_eq!(upstream.max_tokens, 2000);
    }

    #[test]
    fn test_empty_messages_accepted() {
        let request = parse(json!({"messages": [], "system": ""}));
        let upstream = UpstreamRequest::from_completion(request, "m", 10);
        assert_eq!(upstream.messages, Some(json!([])));
        assert_eq!(upstream.message_count(), 0);
    }

    #[test]
    fn test_missing_system_omitted_upstream() {
        let request = parse(json!({"messages": [{"role": "user", "content": "Hi"}]}));
        let upstream = UpstreamRequest::from_completion(request, "m", 10);
        let body = serde_json::to_value(&upstream).unwrap();
        assert!(body.get("system").is_none());
        assert_eq!(
            body,
            json!({"model": "m", "max_tokens": 10, "messages": [{"role": "user", "content": "Hi"}]})
        );
    }

    #[test]
    fn test_messages_forwarded_verbatim() {
        let messages = json!([
            {"role": "system", "content": "unexpected role"},
            {"role": "user", "content": [{"type": "text", "text": "Hi"}], "cache_control": {"type": "ephemeral"}},
            "not even an object"
        ]);
        let request = parse(json!({"messages": messages.clone()}));

        let upstream = UpstreamRequest::from_completion(request, "m", 10);
        let body = serde_json::to_value(&upstream).unwrap();
        assert_eq!(body["messages"], messages);
        assert_eq!(upstream.message_count(), 3);
    }

    #[test]
    fn test_block_system_forwarded_verbatim() {
        let system = json!([{"type": "text", "text": "kb", "cache_control": {"type": "ephemeral"}}]);
        let request = parse(json!({"messages": [], "system": system.clone()}));

        let upstream = UpstreamRequest::from_completion(request, "m", 10);
        assert_eq!(serde_json::to_value(&upstream).unwrap()["system"], system);
    }

    #[test]
    fn test_missing_messages_left_to_upstream() {
        let request = parse(json!({"system": ""}));
        let upstream = UpstreamRequest::from_completion(request, "m", 10);
        let body = serde_json::to_value(&upstream).unwrap();
        assert!(body.get("messages").is_none());
        assert_eq!(upstream.message_count(), 0);
    }
}
