use axum::{
    body::Bytes,
    http::{HeaderMap, HeaderName, HeaderValue},
};
use tracing::warn;

pub const SNS_MESSAGE_TYPE_HEADER: &str = "x-amz-sns-message-type";
pub const IRON_MESSAGE_ID_HEADER: &str = "iron-message-id";
pub const IRON_SUBSCRIBER_MESSAGE_ID_HEADER: &str = "iron-subscriber-message-id";
pub const IRON_SUBSCRIBER_MESSAGE_URL_HEADER: &str = "iron-subscriber-message-url";

/// An inbound provider callback: headers plus the raw body.
#[derive(Debug, Clone, Default)]
pub struct WebhookRequest {
    headers: HeaderMap,
    body: Bytes,
}

impl WebhookRequest {
    pub fn new(headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            headers,
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.headers.insert(HeaderName::from_static(name), value);
            }
            Err(_) => {
                warn!(header = name, "Dropping header with invalid value");
            }
        }
        self
    }

    /// Case-insensitive lookup; `None` when absent or not visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
