//! Outbound ports consumed by the application layer

pub mod billing;

pub use billing::{BillingGateway, BillingProfile, GatewayError, GatewayResult, RemoteOp};
