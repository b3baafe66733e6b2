use serde_json::Value as JsonValue;
use tracing::debug;

use crate::{
    error::{GatewayError, Result},
    models::{
        event::{NotificationEvent, NotificationKind},
        notification::{Metadata, Notification, NotificationBody},
        request::{
            IRON_MESSAGE_ID_HEADER, IRON_SUBSCRIBER_MESSAGE_ID_HEADER,
            IRON_SUBSCRIBER_MESSAGE_URL_HEADER, WebhookRequest,
        },
        status::{Acknowledgement, Translation},
    },
    providers::queue_name::{QUEUE_ROUTING_KEY, resolve_ironmq_queue},
};

pub fn translate(request: &WebhookRequest) -> Result<Translation> {
    let message_id = request
        .header(IRON_MESSAGE_ID_HEADER)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| GatewayError::Decode(format!("missing {}", IRON_MESSAGE_ID_HEADER)))?
        .to_string();

    let mut message = match serde_json::from_slice::<JsonValue>(request.body())? {
        JsonValue::Object(object) => object,
        _ => return Err(GatewayError::Decode("expected a JSON object".to_string())),
    };

    let subscriber_url = request.header(IRON_SUBSCRIBER_MESSAGE_URL_HEADER);
    let queue = resolve_ironmq_queue(&message, subscriber_url)?;

    let mut metadata = Metadata::new();
    metadata.insert(
        IRON_SUBSCRIBER_MESSAGE_ID_HEADER.to_string(),
        request
            .header(IRON_SUBSCRIBER_MESSAGE_ID_HEADER)
            .map(str::to_string),
    );
    metadata.insert(
        IRON_SUBSCRIBER_MESSAGE_URL_HEADER.to_string(),
        subscriber_url.map(str::to_string),
    );

    message.remove(QUEUE_ROUTING_KEY);

    debug!(queue = %queue, message_id = %message_id, "Decoded IronMQ push");

    Ok(Translation {
        event: NotificationEvent::new(
            queue,
            NotificationKind::Message,
            Notification::new(message_id, NotificationBody::Json(message), metadata),
        ),
        ack: Acknowledgement::IronMq,
    })
}
