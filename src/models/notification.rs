use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

pub type Metadata = BTreeMap<String, Option<String>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotificationBody {
    Text(String),
    Json(Map<String, JsonValue>),
}

impl NotificationBody {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NotificationBody::Text(text) => Some(text),
            NotificationBody::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&Map<String, JsonValue>> {
        match self {
            NotificationBody::Text(_) => None,
            NotificationBody::Json(object) => Some(object),
        }
    }
}

/// A provider message normalized into a single shape.
///
/// `metadata` only ever carries the keys the originating provider adapter
/// defines; inbound headers are never passed through wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    message_id: String,
    body: NotificationBody,
    metadata: Metadata,
}

impl Notification {
    pub fn new(message_id: String, body: NotificationBody, metadata: Metadata) -> Self {
        Self {
            message_id,
            body,
            metadata,
        }
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn body(&self) -> &NotificationBody {
        &self.body
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Looks up a metadata value, flattening "absent key" and "null value".
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(|value| value.as_deref())
    }
}
