//! Billing provider port
//!
//! Abstraction over the external payment provider (Stripe-compatible).
//! The provider has its own failure domain: every call either succeeds,
//! is rejected for business reasons, or is unreachable. The synchronizer
//! maps these onto the domain error taxonomy.

use async_trait::async_trait;

/// Remote call outcome, collapsed from provider-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The provider declined the operation (invalid data, declined card).
    Rejected(String),
    /// Transport failure or timeout; the operation may be retried.
    Unreachable(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(reason) => write!(f, "rejected: {}", reason),
            Self::Unreachable(reason) => write!(f, "unreachable: {}", reason),
        }
    }
}

impl std::error::Error for GatewayError {}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Contact profile pushed to the provider. The remote representation is
/// not field-granular, so updates always carry the full profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// One remote mutation bound to an aggregate's remote counterpart id.
///
/// Plain data on purpose: the synchronizer logs it (keyed by aggregate id
/// + kind) before dispatching, which is where a durable outbox write
/// would slot in later without changing the contract.
#[derive(Debug, Clone)]
pub enum RemoteOp {
    UpdateProfile {
        remote_id: String,
        profile: BillingProfile,
    },
    DeleteProfile {
        remote_id: String,
    },
    UpdatePaymentIntentAmount {
        remote_id: String,
        amount_cents: i64,
    },
    CapturePaymentIntent {
        remote_id: String,
        amount_cents: i64,
    },
    CancelPaymentIntent {
        remote_id: String,
    },
}

impl RemoteOp {
    /// Stable operation label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UpdateProfile { .. } => "billing.update_profile",
            Self::DeleteProfile { .. } => "billing.delete_profile",
            Self::UpdatePaymentIntentAmount { .. } => "billing.update_payment_intent_amount",
            Self::CapturePaymentIntent { .. } => "billing.capture_payment_intent",
            Self::CancelPaymentIntent { .. } => "billing.cancel_payment_intent",
        }
    }

    /// Remote counterpart id the operation is bound to.
    pub fn remote_id(&self) -> &str {
        match self {
            Self::UpdateProfile { remote_id, .. }
            | Self::DeleteProfile { remote_id }
            | Self::UpdatePaymentIntentAmount { remote_id, .. }
            | Self::CapturePaymentIntent { remote_id, .. }
            | Self::CancelPaymentIntent { remote_id } => remote_id,
        }
    }
}

/// Stateless billing provider client, shared across requests.
#[async_trait]
pub trait BillingGateway: Send + Sync {
    /// Create a customer profile; returns the remote customer id.
    async fn create_customer(&self, profile: &BillingProfile) -> GatewayResult<String>;

    /// Replace the full contact profile of a remote customer.
    async fn update_customer(&self, remote_id: &str, profile: &BillingProfile)
        -> GatewayResult<()>;

    /// Delete a remote customer profile.
    async fn delete_customer(&self, remote_id: &str) -> GatewayResult<()>;

    /// Create a payment intent for a customer; returns the remote intent id.
    async fn create_payment_intent(
        &self,
        customer_remote_id: &str,
        amount_cents: i64,
        currency: &str,
    ) -> GatewayResult<String>;

    /// Push a new amount to an existing payment intent.
    async fn update_payment_intent_amount(
        &self,
        remote_id: &str,
        amount_cents: i64,
    ) -> GatewayResult<()>;

    /// Capture a payment intent for its final amount.
    async fn capture_payment_intent(&self, remote_id: &str, amount_cents: i64)
        -> GatewayResult<()>;

    /// Cancel a payment intent.
    async fn cancel_payment_intent(&self, remote_id: &str) -> GatewayResult<()>;
}
