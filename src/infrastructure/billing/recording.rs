//! In-process billing gateway for development and tests
//!
//! Records every call it receives and can be scripted to fail, which is
//! how the synchronizer's rollback paths are exercised without a real
//! provider. Also wired in as the "mock" provider in configuration.

use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::ports::{BillingGateway, BillingProfile, GatewayError, GatewayResult};

/// One gateway invocation, labeled like the dispatch log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub op: &'static str,
    pub remote_id: String,
}

#[derive(Default)]
pub struct RecordingBillingGateway {
    calls: Mutex<Vec<RecordedCall>>,
    failure: Mutex<Option<GatewayError>>,
}

impl RecordingBillingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next calls to fail. `None` restores success.
    pub fn set_failure(&self, failure: Option<GatewayError>) {
        *self.failure.lock().unwrap() = failure;
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, op: &'static str, remote_id: &str) -> GatewayResult<()> {
        self.calls.lock().unwrap().push(RecordedCall {
            op,
            remote_id: remote_id.to_string(),
        });
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BillingGateway for RecordingBillingGateway {
    async fn create_customer(&self, _profile: &BillingProfile) -> GatewayResult<String> {
        self.record("billing.create_profile", "")?;
        Ok(format!("cus_mock_{}", Uuid::new_v4().simple()))
    }

    async fn update_customer(
        &self,
        remote_id: &str,
        _profile: &BillingProfile,
    ) -> GatewayResult<()> {
        self.record("billing.update_profile", remote_id)
    }

    async fn delete_customer(&self, remote_id: &str) -> GatewayResult<()> {
        self.record("billing.delete_profile", remote_id)
    }

    async fn create_payment_intent(
        &self,
        customer_remote_id: &str,
        _amount_cents: i64,
        _currency: &str,
    ) -> GatewayResult<String> {
        self.record("billing.create_payment_intent", customer_remote_id)?;
        Ok(format!("pi_mock_{}", Uuid::new_v4().simple()))
    }

    async fn update_payment_intent_amount(
        &self,
        remote_id: &str,
        _amount_cents: i64,
    ) -> GatewayResult<()> {
        self.record("billing.update_payment_intent_amount", remote_id)
    }

    async fn capture_payment_intent(&self, remote_id: &str, _amount_cents: i64) -> GatewayResult<()> {
        self.record("billing.capture_payment_intent", remote_id)
    }

    async fn cancel_payment_intent(&self, remote_id: &str) -> GatewayResult<()> {
        self.record("billing.cancel_payment_intent", remote_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_calls_in_order() {
        let gw = RecordingBillingGateway::new();
        let cus = gw
            .create_customer(&BillingProfile {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                phone: "+5511987654321".into(),
                address: "Rua Augusta 120, São Paulo, Brazil".into(),
            })
            .await
            .unwrap();
        assert!(cus.starts_with("cus_mock_"));
        gw.delete_customer(&cus).await.unwrap();

        let calls = gw.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].op, "billing.create_profile");
        assert_eq!(calls[1].op, "billing.delete_profile");
        assert_eq!(calls[1].remote_id, cus);
    }

    #[tokio::test]
    async fn scripted_failure_applies_until_cleared() {
        let gw = RecordingBillingGateway::new();
        gw.set_failure(Some(GatewayError::Unreachable("timeout".into())));
        assert!(gw.cancel_payment_intent("pi_1").await.is_err());

        gw.set_failure(None);
        assert!(gw.cancel_payment_intent("pi_1").await.is_ok());
        assert_eq!(gw.call_count(), 2);
    }
}
