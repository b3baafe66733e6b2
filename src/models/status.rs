use std::fmt::{Display, Formatter, Result};

use crate::models::event::NotificationEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    SnsNotification,
    SnsSubscription,
    IronMq,
}

impl Acknowledgement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Acknowledgement::SnsNotification => "SNS Message Notification Received.",
            Acknowledgement::SnsSubscription => "SNS Subscription Confirmation Received.",
            Acknowledgement::IronMq => "IronMQ Notification Received.",
        }
    }
}

impl Display for Acknowledgement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully constructed adapter result, ready to be emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub event: NotificationEvent,
    pub ack: Acknowledgement,
}
