use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use crate::models::event::NotificationEvent;

/// Receives every event the gateway produces.
///
/// `emit` is fire-and-forget: the gateway neither awaits nor retries it.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: NotificationEvent);
}

/// Hands events to a background consumer, normally the broker publisher.
#[derive(Clone)]
pub struct ChannelSink {
    sender: UnboundedSender<NotificationEvent>,
}

impl ChannelSink {
    pub fn new(sender: UnboundedSender<NotificationEvent>) -> Self {
        Self { sender }
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: NotificationEvent) {
        if let Err(e) = self.sender.send(event) {
            let event = e.0;
            warn!(
                queue = %event.queue_name(),
                kind = %event.kind(),
                message_id = %event.notification().message_id(),
                "Event consumer has shut down, dropping event"
            );
        }
    }
}
