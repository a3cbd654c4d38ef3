//! Billing provider clients

pub mod http_gateway;
pub mod recording;

pub use http_gateway::HttpBillingGateway;
pub use recording::{RecordedCall, RecordingBillingGateway};
