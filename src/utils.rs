use tokio::{
    sync::mpsc::UnboundedReceiver,
    time::{Duration, sleep},
};
use tracing::{debug, error, info, warn};

use crate::{
    clients::rbmq::RabbitMqClient,
    models::{
        event::{EventEnvelope, NotificationEvent},
        retry::RetryConfig,
    },
};

/// Drains dispatched events into the broker until every sender is dropped.
///
/// An event that still fails after the last attempt is logged and dropped;
/// the provider has already been acknowledged by then.
pub async fn run_publisher(
    client: &RabbitMqClient,
    retry_config: &RetryConfig,
    mut receiver: UnboundedReceiver<NotificationEvent>,
) {
    info!(exchange = %client.exchange_name(), "Event publisher started");

    while let Some(event) = receiver.recv().await {
        let envelope = EventEnvelope::from(event);

        let result = retry_with_backoff(retry_config, || client.publish_event(&envelope)).await;

        if let Err(e) = result {
            error!(
                routing_key = %envelope.routing_key,
                message_id = %envelope.notification.message_id(),
                error = %e,
                "Dropping notification event after exhausting publish attempts"
            );
        }
    }

    info!("Event channel closed, publisher stopping");
}

pub async fn retry_with_backoff<F, Fut, T, E>(config: &RetryConfig, operation: F) -> Result<T, E>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;
    let mut delay_ms = config.initial_delay_ms;

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(
                        attempt,
                        max_attempts = config.max_attempts,
                        "Retry succeeded"
                    );
                }
                return Ok(result);
            }
            Err(e) => {
                if attempt >= config.max_attempts {
                    warn!(
                        max_attempts = config.max_attempts,
                        error = %e,
                        "Retry failed after exhausting all attempts"
                    );
                    return Err(e);
                }

                debug!(
                    attempt,
                    max_attempts = config.max_attempts,
                    delay_ms,
                    error = %e,
                    "Retry attempt failed, backing off"
                );

                let jitter = rand::random_range(-0.1..=0.1);

                let jittered_delay = (delay_ms as f64 * (1.0 + jitter)) as u64;

                sleep(Duration::from_millis(jittered_delay)).await;

                delay_ms = std::cmp::min(
                    delay_ms.saturating_mul(config.backoff_multiplier),
                    config.max_delay_ms,
                );
            }
        }
    }
}
