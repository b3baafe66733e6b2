#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use qpush_gateway::{
    EventSink, Gateway, NotificationEvent, WebhookRequest,
    models::request::{
        IRON_MESSAGE_ID_HEADER, IRON_SUBSCRIBER_MESSAGE_ID_HEADER,
        IRON_SUBSCRIBER_MESSAGE_URL_HEADER, SNS_MESSAGE_TYPE_HEADER,
    },
};
use serde_json::{Value, json};

pub const TOPIC_ARN: &str = "arn:aws:sns:us-east-1:123456789012:qpush_orders";
pub const SUBSCRIBER_URL: &str = "https://api/2/projects/p/queues/qpush_billing/messages/m";

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<NotificationEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<NotificationEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: NotificationEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn recording_gateway() -> (Gateway, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    (Gateway::new(sink.clone()), sink)
}

pub fn sns_notification_body(subject: &str) -> Value {
    json!({
        "Type": "Notification",
        "MessageId": "22b80b92-fdea-4c2c-8f9d-bdfb0c7bf324",
        "TopicArn": TOPIC_ARN,
        "Subject": subject,
        "Message": "{\"order_id\":42}",
        "Timestamp": "2024-05-01T12:00:00.000Z",
        "SignatureVersion": "1",
        "Signature": "EXAMPLE",
        "SigningCertURL": "https://sns.us-east-1.amazonaws.com/cert.pem",
        "UnsubscribeURL": "https://sns.us-east-1.amazonaws.com/?Action=Unsubscribe"
    })
}

pub fn sns_subscription_body(topic_arn: &str) -> Value {
    json!({
        "Type": "SubscriptionConfirmation",
        "MessageId": "165545c9-2a5c-472c-8df2-7ff2be2b3b1b",
        "Token": "2336412f37fb687f5d51e6e241d09c805a5a57b30d712f794cc5f6a988666d92768dd60a747ba6f3beb71854e285d6ad02428b09ceece29417f1f02d609c582afbacc99c583a916b9981dd2728f4ae6fdb82efd087cc3b7849e05798d2d2785c03b0879594eeac82c01f235d0e717736",
        "TopicArn": topic_arn,
        "Message": "You have chosen to subscribe to the topic. To confirm the subscription, visit the SubscribeURL included in this message.",
        "SubscribeURL": "https://sns.us-east-1.amazonaws.com/?Action=ConfirmSubscription",
        "Timestamp": "2024-05-01T11:59:00.000Z"
    })
}

pub fn sns_request(message_type: &str, body: &Value) -> WebhookRequest {
    WebhookRequest::new(Default::default(), body.to_string())
        .with_header(SNS_MESSAGE_TYPE_HEADER, message_type)
}

pub fn ironmq_request(body: &str, subscriber_url: Option<&str>) -> WebhookRequest {
    let request = WebhookRequest::new(Default::default(), body.to_string())
        .with_header(IRON_MESSAGE_ID_HEADER, "6154283279014182657")
        .with_header(IRON_SUBSCRIBER_MESSAGE_ID_HEADER, "6154283279014182658");

    match subscriber_url {
        Some(url) => request.with_header(IRON_SUBSCRIBER_MESSAGE_URL_HEADER, url),
        None => request,
    }
}
