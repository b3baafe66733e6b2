//! Translation of provider push callbacks into notification events.
//!
//! Each adapter is a pure function from a `WebhookRequest` to a
//! `Translation`; nothing is emitted from here.

pub mod ironmq;
pub mod queue_name;
pub mod sns;

use crate::{
    error::Result,
    models::{
        request::{IRON_MESSAGE_ID_HEADER, SNS_MESSAGE_TYPE_HEADER, WebhookRequest},
        status::Translation,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Sns,
    IronMq,
}

impl Provider {
    /// Providers whose marker header is present, in evaluation order.
    ///
    /// SNS is checked before IronMQ. A request carrying both headers is run
    /// through both adapters and the IronMQ acknowledgement is the one
    /// returned.
    pub fn detect(request: &WebhookRequest) -> Vec<Provider> {
        let mut providers = Vec::with_capacity(2);

        if request.has_header(SNS_MESSAGE_TYPE_HEADER) {
            providers.push(Provider::Sns);
        }

        if request.has_header(IRON_MESSAGE_ID_HEADER) {
            providers.push(Provider::IronMq);
        }

        providers
    }

    pub fn translate(&self, request: &WebhookRequest) -> Result<Translation> {
        match self {
            Provider::Sns => sns::translate(request),
            Provider::IronMq => ironmq::translate(request),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Provider::Sns => "sns",
            Provider::IronMq => "ironmq",
        }
    }
}
