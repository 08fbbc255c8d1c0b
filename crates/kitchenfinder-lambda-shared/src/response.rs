//! Uniform response envelope for the Lambda handler.

use std::collections::HashMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Tagged response body, resolved to a JSON string by a single encoder.
///
/// `Message` bodies are wrapped as `{"message": ...}`; `Payload` bodies
/// are serialized verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// A human-readable status or error message.
    Message(String),
    /// A structured payload returned as-is.
    Payload(serde_json::Value),
}

/// API Gateway proxy response envelope, used for success and error paths
/// alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    /// JSON-encoded body string.
    pub body: String,
}

impl ApiGatewayResponse {
    /// Encode a response body into the envelope.
    pub fn new(status: StatusCode, body: ResponseBody) -> Self {
        let body = match body {
            ResponseBody::Message(message) => {
                serde_json::json!({ "message": message }).to_string()
            }
            ResponseBody::Payload(value) => value.to_string(),
        };

        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            status_code: status.as_u16(),
            headers,
            body,
        }
    }

    /// Shorthand for a message-bodied response.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, ResponseBody::Message(message.into()))
    }

    /// Shorthand for a payload-bodied response.
    pub fn payload(status: StatusCode, payload: serde_json::Value) -> Self {
        Self::new(status, ResponseBody::Payload(payload))
    }
}
