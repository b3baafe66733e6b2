use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value as JsonValue};

use crate::error::{GatewayError, Result};

/// Body key a publisher may set to name the logical queue explicitly.
pub const QUEUE_ROUTING_KEY: &str = "_qpush_queue";

/// Prefix applied to provider-side resource names for managed queues.
pub const QUEUE_PREFIX: &str = "qpush_";

static SUBSCRIBER_URL_QUEUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/queues/([a-z0-9_-]+)/messages/").expect("subscriber url pattern is valid")
});

pub fn strip_queue_prefix(name: &str) -> &str {
    name.strip_prefix(QUEUE_PREFIX).unwrap_or(name)
}

/// `arn:aws:sns:us-east-1:123456789012:qpush_orders` -> `orders`
pub fn queue_from_topic_arn(topic_arn: &str) -> Option<String> {
    let last = topic_arn.rsplit(':').next()?;
    let queue = strip_queue_prefix(last);

    (!queue.is_empty()).then(|| queue.to_string())
}

pub fn queue_from_subscriber_url(url: &str) -> Option<String> {
    let captures = SUBSCRIBER_URL_QUEUE.captures(url)?;
    let queue = strip_queue_prefix(captures.get(1)?.as_str());

    (!queue.is_empty()).then(|| queue.to_string())
}

/// Works out which logical queue an IronMQ push belongs to.
///
/// The explicit body key wins over the subscriber URL. The key is left in
/// place; the adapter strips it once the name is known.
pub fn resolve_ironmq_queue(
    message: &Map<String, JsonValue>,
    subscriber_url: Option<&str>,
) -> Result<String> {
    if let Some(value) = message.get(QUEUE_ROUTING_KEY) {
        return match value.as_str() {
            Some(queue) if !queue.is_empty() => Ok(queue.to_string()),
            _ => Err(GatewayError::QueueResolution(format!(
                "{} must be a non-empty string",
                QUEUE_ROUTING_KEY
            ))),
        };
    }

    subscriber_url
        .and_then(queue_from_subscriber_url)
        .ok_or_else(|| GatewayError::QueueResolution("unable to determine queue name".to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: JsonValue) -> Map<String, JsonValue> {
        match value {
            JsonValue::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn topic_arn_takes_last_segment_without_prefix() {
        assert_eq!(
            queue_from_topic_arn("arn:aws:sns:us-east-1:123456789012:qpush_orders").as_deref(),
            Some("orders")
        );
        assert_eq!(
            queue_from_topic_arn("arn:aws:sns:us-east-1:123456789012:orders").as_deref(),
            Some("orders")
        );
    }

    #[test]
    fn topic_arn_prefix_is_only_stripped_at_start() {
        assert_eq!(
            queue_from_topic_arn("arn:aws:sns:eu-west-1:1:audit_qpush_log").as_deref(),
            Some("audit_qpush_log")
        );
    }

    #[test]
    fn topic_arn_without_queue_is_rejected() {
        assert_eq!(queue_from_topic_arn("arn:aws:sns:eu-west-1:1:qpush_"), None);
        assert_eq!(queue_from_topic_arn(""), None);
    }

    #[test]
    fn subscriber_url_match_is_case_insensitive() {
        assert_eq!(
            queue_from_subscriber_url("https://mq-aws-us-east-1.iron.io/3/projects/p/QUEUES/qpush_Billing/MESSAGES/42")
                .as_deref(),
            Some("Billing")
        );
    }

    #[test]
    fn subscriber_url_without_messages_segment_does_not_match() {
        assert_eq!(
            queue_from_subscriber_url("https://api/2/projects/p/queues/billing"),
            None
        );
        assert_eq!(
            queue_from_subscriber_url("https://api/2/projects/p/queues/bill.ing/messages/1"),
            None
        );
    }

    #[test]
    fn body_key_wins_over_subscriber_url() {
        let message = object(json!({ "_qpush_queue": "invoices", "total": 10 }));

        let queue = resolve_ironmq_queue(
            &message,
            Some("https://api/2/projects/p/queues/qpush_billing/messages/m"),
        );

        assert_eq!(queue, Ok("invoices".to_string()));
        assert!(message.contains_key(QUEUE_ROUTING_KEY));
    }

    #[test]
    fn falls_back_to_subscriber_url() {
        let message = object(json!({ "total": 10 }));

        let queue = resolve_ironmq_queue(
            &message,
            Some("https://api/2/projects/p/queues/qpush_billing/messages/m"),
        );

        assert_eq!(queue, Ok("billing".to_string()));
    }

    #[test]
    fn non_string_routing_key_is_rejected() {
        let message = object(json!({ "_qpush_queue": 7 }));

        assert!(matches!(
            resolve_ironmq_queue(&message, None),
            Err(GatewayError::QueueResolution(_))
        ));
    }

    #[test]
    fn nothing_to_resolve_from_fails() {
        let message = object(json!({ "total": 10 }));

        assert_eq!(
            resolve_ironmq_queue(&message, Some("https://api/2/projects/p/topics/t")),
            Err(GatewayError::QueueResolution(
                "unable to determine queue name".to_string()
            ))
        );
        assert!(resolve_ironmq_queue(&message, None).is_err());
    }
}
