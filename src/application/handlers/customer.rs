//! Customer use cases

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::sync::Synchronizer;
use crate::domain::customer::Customer;
use crate::domain::ports::{BillingGateway, RemoteOp};
use crate::domain::value_objects::{Address, Email, PersonName, Phone};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::database::repositories::CustomerStore;

/// Customer lifecycle, including the remote billing profile.
///
/// Creation talks to the provider first so the local row is only ever
/// written with a real remote id; every profile update goes through the
/// synchronizer and pushes the full contact profile.
pub struct CustomerHandler {
    repos: Arc<dyn RepositoryProvider>,
    sync: Arc<Synchronizer>,
    gateway: Arc<dyn BillingGateway>,
}

impl CustomerHandler {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        sync: Arc<Synchronizer>,
        gateway: Arc<dyn BillingGateway>,
    ) -> Self {
        Self {
            repos,
            sync,
            gateway,
        }
    }

    pub async fn create(
        &self,
        name: PersonName,
        email: Email,
        phone: Phone,
        address: Address,
        date_of_birth: NaiveDate,
    ) -> DomainResult<Customer> {
        if self
            .repos
            .customers()
            .find_by_email(email.as_str())
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(format!(
                "customer with email '{}' already exists",
                email.as_str()
            )));
        }

        // Remote first: the local row never exists without its remote
        // counterpart. The opposite gap (remote profile without a local
        // row) is compensated below.
        let mut customer = Customer::new(name, email, phone, address, date_of_birth, "");
        let remote_id = self
            .gateway
            .create_customer(&customer.billing_profile())
            .await
            .map_err(DomainError::from)?;
        customer.billing_customer_id = remote_id.clone();

        if let Err(e) = self.repos.customers().save(customer.clone()).await {
            warn!(
                customer_id = %customer.id,
                remote_id = %remote_id,
                "local insert failed after remote profile creation, compensating"
            );
            if let Err(cleanup) = self.gateway.delete_customer(&remote_id).await {
                warn!(remote_id = %remote_id, error = %cleanup, "compensation failed, orphan remote profile");
            }
            return Err(e);
        }

        info!(customer_id = %customer.id, remote_id = %remote_id, "customer created");
        Ok(customer)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Customer> {
        self.repos
            .customers()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Customer", id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Customer>> {
        self.repos.customers().find_all().await
    }

    pub async fn update_name(&self, id: Uuid, name: PersonName) -> DomainResult<Customer> {
        self.sync
            .execute(
                &CustomerStore,
                id,
                |c| {
                    c.change_name(name);
                    Ok(())
                },
                profile_update,
            )
            .await
    }

    pub async fn update_email(&self, id: Uuid, email: Email) -> DomainResult<Customer> {
        if let Some(other) = self.repos.customers().find_by_email(email.as_str()).await? {
            if other.id != id {
                return Err(DomainError::Conflict(format!(
                    "customer with email '{}' already exists",
                    email.as_str()
                )));
            }
        }

        self.sync
            .execute(
                &CustomerStore,
                id,
                |c| {
                    c.change_email(email);
                    Ok(())
                },
                profile_update,
            )
            .await
    }

    pub async fn update_phone(&self, id: Uuid, phone: Phone) -> DomainResult<Customer> {
        self.sync
            .execute(
                &CustomerStore,
                id,
                |c| {
                    c.change_phone(phone);
                    Ok(())
                },
                profile_update,
            )
            .await
    }

    pub async fn update_address(&self, id: Uuid, address: Address) -> DomainResult<Customer> {
        self.sync
            .execute(
                &CustomerStore,
                id,
                |c| {
                    c.change_address(address);
                    Ok(())
                },
                profile_update,
            )
            .await
    }

    /// Date of birth is not part of the remote profile; plain local update.
    pub async fn update_date_of_birth(
        &self,
        id: Uuid,
        date_of_birth: NaiveDate,
    ) -> DomainResult<Customer> {
        let mut customer = self.get(id).await?;
        customer.change_date_of_birth(date_of_birth);
        self.repos.customers().update(customer.clone()).await?;
        Ok(customer)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.sync
            .remove(&CustomerStore, id, |c: &Customer| RemoteOp::DeleteProfile {
                remote_id: c.billing_customer_id.clone(),
            })
            .await?;
        info!(customer_id = %id, "customer deleted");
        Ok(())
    }
}

fn profile_update(c: &Customer) -> RemoteOp {
    RemoteOp::UpdateProfile {
        remote_id: c.billing_customer_id.clone(),
        profile: c.billing_profile(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::GatewayError;
    use crate::infrastructure::billing::RecordingBillingGateway;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_support::in_memory_db;

    struct Fixture {
        handler: CustomerHandler,
        gateway: Arc<RecordingBillingGateway>,
    }

    async fn fixture() -> Fixture {
        let db = in_memory_db().await;
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let gateway = Arc::new(RecordingBillingGateway::new());
        let sync = Arc::new(Synchronizer::new(db, gateway.clone()));
        let handler = CustomerHandler::new(repos, sync, gateway.clone());
        Fixture { handler, gateway }
    }

    async fn create_jane(handler: &CustomerHandler) -> Customer {
        handler
            .create(
                PersonName::new("Jane", "Doe").unwrap(),
                Email::new("jane@example.com").unwrap(),
                Phone::new("+5511987654321").unwrap(),
                Address::new("Brazil", "São Paulo", "Rua Augusta", 120).unwrap(),
                NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_provisions_remote_profile_first() {
        let f = fixture().await;
        let customer = create_jane(&f.handler).await;
        assert!(customer.billing_customer_id.starts_with("cus_mock_"));

        let calls = f.gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].op, "billing.create_profile");
    }

    #[tokio::test]
    async fn create_rejects_duplicate_email_without_remote_call() {
        let f = fixture().await;
        create_jane(&f.handler).await;
        let before = f.gateway.call_count();

        let err = f
            .handler
            .create(
                PersonName::new("Other", "Jane").unwrap(),
                Email::new("jane@example.com").unwrap(),
                Phone::new("+5511900000000").unwrap(),
                Address::new("Brazil", "Rio", "Rua A", 1).unwrap(),
                NaiveDate::from_ymd_opt(1985, 1, 1).unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(f.gateway.call_count(), before);
    }

    #[tokio::test]
    async fn name_update_pushes_full_profile() {
        let f = fixture().await;
        let customer = create_jane(&f.handler).await;

        let updated = f
            .handler
            .update_name(customer.id, PersonName::new("Jane", "Smith").unwrap())
            .await
            .unwrap();
        assert_eq!(updated.name.full(), "Jane Smith");

        let calls = f.gateway.calls();
        assert_eq!(calls.last().unwrap().op, "billing.update_profile");
        assert_eq!(calls.last().unwrap().remote_id, customer.billing_customer_id);
    }

    #[tokio::test]
    async fn rejected_name_update_leaves_customer_unchanged() {
        let f = fixture().await;
        let customer = create_jane(&f.handler).await;
        f.gateway
            .set_failure(Some(GatewayError::Rejected("invalid name".into())));

        let err = f
            .handler
            .update_name(customer.id, PersonName::new("Jane", "Rejected").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RemoteRejected(_)));

        f.gateway.set_failure(None);
        let stored = f.handler.get(customer.id).await.unwrap();
        assert_eq!(stored.name.full(), "Jane Doe");
    }

    #[tokio::test]
    async fn date_of_birth_update_is_local_only() {
        let f = fixture().await;
        let customer = create_jane(&f.handler).await;
        let before = f.gateway.call_count();

        let updated = f
            .handler
            .update_date_of_birth(customer.id, NaiveDate::from_ymd_opt(1991, 5, 13).unwrap())
            .await
            .unwrap();
        assert_eq!(
            updated.date_of_birth,
            NaiveDate::from_ymd_opt(1991, 5, 13).unwrap()
        );
        assert_eq!(f.gateway.call_count(), before);
    }

    #[tokio::test]
    async fn delete_removes_remote_profile() {
        let f = fixture().await;
        let customer = create_jane(&f.handler).await;

        f.handler.delete(customer.id).await.unwrap();
        assert!(matches!(
            f.handler.get(customer.id).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
        assert_eq!(f.gateway.calls().last().unwrap().op, "billing.delete_profile");
    }
}
