use std::fmt::{Display, Formatter, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::notification::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Message,
    Subscription,
}

impl NotificationKind {
    pub fn as_str(&self) -> &str {
        match self {
            NotificationKind::Message => "message",
            NotificationKind::Subscription => "subscription",
        }
    }
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEvent {
    queue_name: String,
    kind: NotificationKind,
    notification: Notification,
}

impl NotificationEvent {
    pub fn new(queue_name: String, kind: NotificationKind, notification: Notification) -> Self {
        Self {
            queue_name,
            kind,
            notification,
        }
    }

    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// `<queue>.<kind>`, e.g. `orders.message`.
    pub fn routing_key(&self) -> String {
        format!("{}.{}", self.queue_name, self.kind)
    }
}

/// Wire form of a `NotificationEvent` as published to the broker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub queue: String,
    pub kind: NotificationKind,
    pub routing_key: String,
    pub notification: Notification,
    pub received_at: DateTime<Utc>,
}

impl From<NotificationEvent> for EventEnvelope {
    fn from(event: NotificationEvent) -> Self {
        let routing_key = event.routing_key();

        Self {
            queue: event.queue_name,
            kind: event.kind,
            routing_key,
            notification: event.notification,
            received_at: Utc::now(),
        }
    }
}
