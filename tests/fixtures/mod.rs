#![allow(dead_code)]

use serde_json::{Value, json};

pub const FBA_SYSTEM_PROMPT: &str =
    "You are a support assistant for Amazon FBA inbound shipments. Answer using the knowledge base.";

pub fn greeting_request() -> Value {
    json!({
        "messages": [{"role": "user", "content": "Hi"}],
        "system": "",
        "max_tokens": 2000
    })
}

pub fn greeting_response() -> Value {
    json!({
        "content": [{"text": "Hello"}],
        "usage": {"input_tokens": 5, "output_tokens": 3}
    })
}

pub fn sample_conversation_request() -> Value {
    json!({
        "messages": [
            {"role": "user", "content": "How do I label cartons for FBA?"},
            {"role": "assistant", "content": "Each carton needs its own FBA box label."},
            {"role": "user", "content": "Where on the box does it go?"}
        ],
        "system": FBA_SYSTEM_PROMPT
    })
}

pub fn sample_completion_response() -> Value {
    json!({
        "id": "msg_01test",
        "type": "message",
        "role": "assistant",
        "model": "claude-sonnet-4-20250514",
        "content": [{"type": "text", "text": "Place the label on a side of the box, not on a seam."}],
        "stop_reason": "end_turn",
        "stop_sequence": null,
        "usage": {"input_tokens": 100, "output_tokens": 50}
    })
}

pub fn sample_response_without_usage() -> Value {
    json!({
        "id": "msg_02test",
        "type": "message",
        "content": [{"type": "text", "text": "Sure."}]
    })
}

pub fn rate_limit_error_text() -> &'static str {
    r#"{"type":"error","error":{"type":"rate_limit_error","message":"Number of request tokens has exceeded your per-minute rate limit"}}"#
}
