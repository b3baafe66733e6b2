pub mod event;
pub mod health;
pub mod notification;
pub mod request;
pub mod response;
pub mod retry;
pub mod sns;
pub mod status;
