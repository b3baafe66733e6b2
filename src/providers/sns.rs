use serde_json::Value as JsonValue;
use tracing::debug;

use crate::{
    error::{GatewayError, Result},
    models::{
        event::{NotificationEvent, NotificationKind},
        notification::{Metadata, Notification, NotificationBody},
        request::{SNS_MESSAGE_TYPE_HEADER, WebhookRequest},
        sns::{SnsPayload, field_text},
        status::{Acknowledgement, Translation},
    },
    providers::queue_name::queue_from_topic_arn,
};

/// Header value SNS uses for ordinary published messages. Every other value
/// is a subscription lifecycle callback.
pub const NOTIFICATION_TYPE: &str = "Notification";

pub fn translate(request: &WebhookRequest) -> Result<Translation> {
    let document = match serde_json::from_slice::<JsonValue>(request.body())? {
        document @ JsonValue::Object(_) => document,
        _ => return Err(GatewayError::Decode("expected a JSON object".to_string())),
    };

    let SnsPayload {
        message_type,
        topic_arn,
        timestamp,
        message_id,
        message,
        subject,
        token,
    } = serde_json::from_value::<SnsPayload>(document)?;

    let message_id = message_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| GatewayError::Decode("missing MessageId".to_string()))?;

    let mut metadata = Metadata::new();
    metadata.insert("Type".to_string(), field_text(message_type));
    metadata.insert("TopicArn".to_string(), topic_arn.clone());
    metadata.insert("Timestamp".to_string(), field_text(timestamp));

    let body = NotificationBody::Text(field_text(message).unwrap_or_default());

    if request.header(SNS_MESSAGE_TYPE_HEADER) == Some(NOTIFICATION_TYPE) {
        // Publishers put the logical queue name in the Subject line.
        let queue = subject
            .filter(|subject| !subject.is_empty())
            .ok_or_else(|| GatewayError::QueueResolution("missing Subject".to_string()))?;

        metadata.insert("Subject".to_string(), Some(queue.clone()));

        debug!(queue = %queue, message_id = %message_id, "Decoded SNS notification");

        return Ok(Translation {
            event: NotificationEvent::new(
                queue,
                NotificationKind::Message,
                Notification::new(message_id, body, metadata),
            ),
            ack: Acknowledgement::SnsNotification,
        });
    }

    let queue = topic_arn
        .as_deref()
        .and_then(queue_from_topic_arn)
        .ok_or_else(|| {
            GatewayError::QueueResolution("TopicArn does not name a queue".to_string())
        })?;

    metadata.insert("Token".to_string(), field_text(token));

    debug!(queue = %queue, message_id = %message_id, "Decoded SNS subscription callback");

    Ok(Translation {
        event: NotificationEvent::new(
            queue,
            NotificationKind::Subscription,
            Notification::new(message_id, body, metadata),
        ),
        ack: Acknowledgement::SnsSubscription,
    })
}
