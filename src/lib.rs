pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod providers;
pub mod sink;
pub mod telemetry;
pub mod utils;

pub use error::GatewayError;
pub use gateway::{Gateway, Outcome};
pub use models::{
    event::{NotificationEvent, NotificationKind},
    notification::{Notification, NotificationBody},
    request::WebhookRequest,
    status::Acknowledgement,
};
pub use sink::{ChannelSink, EventSink};
