//! HTTP billing gateway (Stripe-compatible API)
//!
//! Form-encoded requests authenticated with the account's secret key.
//! Responses map onto the gateway failure domain: any 4xx is a business
//! rejection, 5xx and transport errors are unreachability.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::domain::ports::{BillingGateway, BillingProfile, GatewayError, GatewayResult};

pub struct HttpBillingGateway {
    client: Client,
    api_base: String,
    secret_key: String,
}

#[derive(Deserialize)]
struct CreatedObject {
    id: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl HttpBillingGateway {
    pub fn new(api_base: impl Into<String>, secret_key: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_base: api_base.into(),
            secret_key: secret_key.into(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.api_base, path);
        self.client
            .request(method, url)
            .bearer_auth(&self.secret_key)
    }

    async fn send(&self, req: RequestBuilder) -> GatewayResult<reqwest::Response> {
        let response = req
            .send()
            .await
            .map_err(|e| GatewayError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status.is_client_error() {
            return Err(GatewayError::Rejected(Self::error_message(response).await));
        }
        Err(GatewayError::Unreachable(format!(
            "provider returned {}",
            status
        )))
    }

    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ApiErrorBody>().await {
            Ok(body) => body.error.message,
            Err(_) => format!("provider returned {}", status),
        }
    }

    async fn expect_id(&self, req: RequestBuilder) -> GatewayResult<String> {
        let response = self.send(req).await?;
        let created: CreatedObject = response
            .json()
            .await
            .map_err(|e| GatewayError::Unreachable(format!("malformed provider response: {}", e)))?;
        Ok(created.id)
    }

    async fn expect_ok(&self, req: RequestBuilder) -> GatewayResult<()> {
        self.send(req).await?;
        Ok(())
    }
}

#[async_trait]
impl BillingGateway for HttpBillingGateway {
    async fn create_customer(&self, profile: &BillingProfile) -> GatewayResult<String> {
        debug!("billing: creating customer profile for {}", profile.email);
        let req = self.request(Method::POST, "/v1/customers").form(&[
            ("name", profile.name.as_str()),
            ("email", profile.email.as_str()),
            ("phone", profile.phone.as_str()),
            ("address[line1]", profile.address.as_str()),
        ]);
        self.expect_id(req).await
    }

    async fn update_customer(
        &self,
        remote_id: &str,
        profile: &BillingProfile,
    ) -> GatewayResult<()> {
        debug!("billing: updating customer {}", remote_id);
        let req = self
            .request(Method::POST, &format!("/v1/customers/{}", remote_id))
            .form(&[
                ("name", profile.name.as_str()),
                ("email", profile.email.as_str()),
                ("phone", profile.phone.as_str()),
                ("address[line1]", profile.address.as_str()),
            ]);
        self.expect_ok(req).await
    }

    async fn delete_customer(&self, remote_id: &str) -> GatewayResult<()> {
        debug!("billing: deleting customer {}", remote_id);
        let req = self.request(Method::DELETE, &format!("/v1/customers/{}", remote_id));
        self.expect_ok(req).await
    }

    async fn create_payment_intent(
        &self,
        customer_remote_id: &str,
        amount_cents: i64,
        currency: &str,
    ) -> GatewayResult<String> {
        debug!(
            "billing: creating payment intent of {} {} for {}",
            amount_cents, currency, customer_remote_id
        );
        let amount = amount_cents.to_string();
        let req = self.request(Method::POST, "/v1/payment_intents").form(&[
            ("customer", customer_remote_id),
            ("amount", amount.as_str()),
            ("currency", currency),
            ("capture_method", "manual"),
        ]);
        self.expect_id(req).await
    }

    async fn update_payment_intent_amount(
        &self,
        remote_id: &str,
        amount_cents: i64,
    ) -> GatewayResult<()> {
        debug!(
            "billing: updating payment intent {} amount to {}",
            remote_id, amount_cents
        );
        let amount = amount_cents.to_string();
        let req = self
            .request(Method::POST, &format!("/v1/payment_intents/{}", remote_id))
            .form(&[("amount", amount.as_str())]);
        self.expect_ok(req).await
    }

    async fn capture_payment_intent(
        &self,
        remote_id: &str,
        amount_cents: i64,
    ) -> GatewayResult<()> {
        debug!("billing: capturing payment intent {}", remote_id);
        let amount = amount_cents.to_string();
        let req = self
            .request(
                Method::POST,
                &format!("/v1/payment_intents/{}/capture", remote_id),
            )
            .form(&[("amount_to_capture", amount.as_str())]);
        self.expect_ok(req).await
    }

    async fn cancel_payment_intent(&self, remote_id: &str) -> GatewayResult<()> {
        debug!("billing: cancelling payment intent {}", remote_id);
        let req = self.request(
            Method::POST,
            &format!("/v1/payment_intents/{}/cancel", remote_id),
        );
        self.expect_ok(req).await
    }
}
