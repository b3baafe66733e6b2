use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use tracing::{debug, warn};

use crate::{
    clients::rbmq::RabbitMqClient,
    models::health::{HealthCheckResponse, HealthStatus, ServiceHealth},
};

pub struct HealthChecker {
    broker: Option<Arc<RabbitMqClient>>,
}

impl HealthChecker {
    pub fn new(broker: Arc<RabbitMqClient>) -> Self {
        Self {
            broker: Some(broker),
        }
    }

    /// A checker with nothing behind it; used when events stay in-process.
    pub fn detached() -> Self {
        Self { broker: None }
    }

    pub fn check_all(&self) -> HealthCheckResponse {
        let mut checks = HashMap::new();

        if let Some(broker) = &self.broker {
            checks.insert("message_broker".to_string(), Self::check_rabbitmq(broker));
        }

        let status = if checks
            .values()
            .any(|health| health.status == HealthStatus::Unhealthy)
        {
            HealthStatus::Unhealthy
        } else {
            HealthStatus::Healthy
        };

        HealthCheckResponse {
            status,
            timestamp: Utc::now(),
            checks,
        }
    }

    fn check_rabbitmq(broker: &RabbitMqClient) -> ServiceHealth {
        if broker.is_connected() {
            debug!("RabbitMQ health check passed");
            ServiceHealth::healthy()
        } else {
            warn!(exchange = %broker.exchange_name(), "RabbitMQ channel is not connected");
            ServiceHealth::unhealthy("Channel is not connected".to_string())
        }
    }
}
