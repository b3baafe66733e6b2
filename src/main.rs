use std::sync::Arc;

use anyhow::{Error, Result};
use qpush_gateway::{
    api::{AppState, run_api_server},
    clients::{health::HealthChecker, rbmq::RabbitMqClient},
    config::Config,
    gateway::Gateway,
    sink::ChannelSink,
    telemetry::init_tracing,
    utils::run_publisher,
};
use tokio::sync::mpsc;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;
    init_tracing(config.log_format);

    let broker = Arc::new(RabbitMqClient::connect(&config).await?);
    let (sender, receiver) = mpsc::unbounded_channel();

    let publisher = {
        let broker = Arc::clone(&broker);
        let retry_config = config.retry_config();
        tokio::spawn(async move { run_publisher(&broker, &retry_config, receiver).await })
    };

    let state = Arc::new(AppState {
        gateway: Gateway::new(Arc::new(ChannelSink::new(sender))),
        health_checker: HealthChecker::new(broker),
    });

    let served = run_api_server(config.server_port, state).await;

    if let Err(e) = &served {
        error!(error = %e, "Notification gateway stopped");
    }

    // The router (and with it the last sender) is gone; let queued events flush.
    publisher.await?;

    served
}
