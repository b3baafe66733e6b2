use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    error::GatewayError,
    models::{request::WebhookRequest, status::Acknowledgement},
    providers::Provider,
    sink::EventSink,
};

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Handled(Acknowledgement),
    Unhandled,
    Failed(GatewayError),
}

/// Turns provider callbacks into events on the injected sink.
///
/// Holds no per-request state, so one instance serves concurrent requests.
#[derive(Clone)]
pub struct Gateway {
    sink: Arc<dyn EventSink>,
}

impl Gateway {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self { sink }
    }

    pub fn route(request: &WebhookRequest) -> Vec<Provider> {
        Provider::detect(request)
    }

    pub fn handle(&self, request: &WebhookRequest) -> Outcome {
        let mut outcome = Outcome::Unhandled;

        for provider in Self::route(request) {
            let translation = match provider.translate(request) {
                Ok(translation) => translation,
                Err(e) => {
                    warn!(provider = provider.as_str(), error = %e, "Rejected provider callback");
                    return Outcome::Failed(e);
                }
            };

            info!(
                provider = provider.as_str(),
                queue = %translation.event.queue_name(),
                kind = %translation.event.kind(),
                message_id = %translation.event.notification().message_id(),
                "Dispatching notification event"
            );

            self.sink.emit(translation.event);
            outcome = Outcome::Handled(translation.ack);
        }

        outcome
    }
}
