use anyhow::{Error, Result, anyhow};
use lapin::{
    BasicProperties, Channel, Connection, ConnectionProperties, ExchangeKind,
    options::{BasicPublishOptions, ExchangeDeclareOptions},
    types::FieldTable,
};
use tracing::{debug, info};

use crate::{config::Config, models::event::EventEnvelope};

/// Publishes notification events to a topic exchange, keyed by
/// `<queue>.<kind>` so consumers can bind per queue or per kind.
pub struct RabbitMqClient {
    channel: Channel,
    exchange_name: String,
}

impl RabbitMqClient {
    pub async fn connect(config: &Config) -> Result<Self, Error> {
        info!("Connecting to RabbitMQ...");

        let connection = Connection::connect(&config.rabbitmq_url, ConnectionProperties::default())
            .await
            .map_err(|_| anyhow!("Failed to connect to RabbitMQ"))?;

        info!("RabbitMQ connection established");

        let channel = connection
            .create_channel()
            .await
            .map_err(|_| anyhow!("RabbitMQ channel creation failed"))?;

        channel
            .exchange_declare(
                &config.notification_exchange,
                ExchangeKind::Topic,
                ExchangeDeclareOptions {
                    durable: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await
            .map_err(|_| anyhow!("Failed to declare notification exchange"))?;

        info!(exchange = %config.notification_exchange, "Notification exchange declared");

        Ok(Self {
            channel,
            exchange_name: config.notification_exchange.clone(),
        })
    }

    pub fn exchange_name(&self) -> &str {
        &self.exchange_name
    }

    pub fn is_connected(&self) -> bool {
        self.channel.status().connected()
    }

    pub async fn publish_event(&self, envelope: &EventEnvelope) -> Result<(), Error> {
        let payload = serde_json::to_vec(envelope)?;

        self.channel
            .basic_publish(
                self.exchange_name.as_str(),
                envelope.routing_key.as_str(),
                BasicPublishOptions::default(),
                &payload,
                BasicProperties::default()
                    .with_delivery_mode(2)
                    .with_content_type("application/json".into())
                    .with_message_id(envelope.notification.message_id().into()),
            )
            .await
            .map_err(|_| anyhow!("Failed to publish notification event"))?
            .await
            .map_err(|_| anyhow!("Broker did not confirm notification event"))?;

        debug!(routing_key = %envelope.routing_key, "Notification event published");

        Ok(())
    }
}
