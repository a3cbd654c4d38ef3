//! Coordinates one local mutation with one remote billing call under a
//! single database transaction.
//!
//! Contract: either the local store and the remote provider both observe
//! the operation, or neither does (from the caller's perspective — the
//! provider's own side effects on a failed call are outside our
//! transaction boundary). Every failure path rolls the transaction back
//! and surfaces a typed `DomainError`; nothing is retried here.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::error::{db_err, DomainError, DomainResult};
use crate::domain::ports::{BillingGateway, GatewayError, RemoteOp};

use super::store::SyncStore;

/// Local/remote transaction synchronizer.
///
/// Owns the connection pool handle and the shared (stateless) billing
/// gateway; borrows aggregates from the stores per invocation.
pub struct Synchronizer {
    db: DatabaseConnection,
    gateway: Arc<dyn BillingGateway>,
}

impl Synchronizer {
    pub fn new(db: DatabaseConnection, gateway: Arc<dyn BillingGateway>) -> Self {
        Self { db, gateway }
    }

    /// Load-mutate-save the aggregate, then dispatch the remote operation
    /// built from the post-mutation state. Commits only when the remote
    /// call succeeds.
    ///
    /// Exactly one remote call is issued when load and mutation succeed;
    /// zero otherwise.
    pub async fn execute<S, M, R>(
        &self,
        store: &S,
        id: Uuid,
        mutate: M,
        remote: R,
    ) -> DomainResult<S::Aggregate>
    where
        S: SyncStore,
        M: FnOnce(&mut S::Aggregate) -> DomainResult<()> + Send,
        R: FnOnce(&S::Aggregate) -> RemoteOp + Send,
    {
        // Precondition probe on the plain connection: a missing aggregate
        // never opens a transaction or reaches the provider.
        if !store.exists(&self.db, id).await.map_err(db_err)? {
            return Err(DomainError::not_found(store.entity(), id));
        }

        let txn = self.db.begin().await.map_err(db_err)?;

        let mut aggregate = match store.load(&txn, id).await {
            Ok(Some(aggregate)) => aggregate,
            // Row vanished between the probe and the transaction.
            Ok(None) => {
                roll_back(txn, store.entity(), id).await;
                return Err(DomainError::not_found(store.entity(), id));
            }
            Err(e) => {
                roll_back(txn, store.entity(), id).await;
                return Err(db_err(e));
            }
        };

        if let Err(e) = mutate(&mut aggregate) {
            roll_back(txn, store.entity(), id).await;
            return Err(e);
        }

        if let Err(e) = store.persist(&txn, &aggregate).await {
            roll_back(txn, store.entity(), id).await;
            return Err(db_err(e));
        }

        if let Err(e) = self.dispatch(store.entity(), id, remote(&aggregate)).await {
            roll_back(txn, store.entity(), id).await;
            return Err(e);
        }

        txn.commit().await.map_err(db_err)?;
        Ok(aggregate)
    }

    /// Delete the aggregate locally and at the provider under the same
    /// discipline as [`execute`](Self::execute).
    pub async fn remove<S, R>(&self, store: &S, id: Uuid, remote: R) -> DomainResult<S::Aggregate>
    where
        S: SyncStore,
        R: FnOnce(&S::Aggregate) -> RemoteOp + Send,
    {
        if !store.exists(&self.db, id).await.map_err(db_err)? {
            return Err(DomainError::not_found(store.entity(), id));
        }

        let txn = self.db.begin().await.map_err(db_err)?;

        let aggregate = match store.load(&txn, id).await {
            Ok(Some(aggregate)) => aggregate,
            Ok(None) => {
                roll_back(txn, store.entity(), id).await;
                return Err(DomainError::not_found(store.entity(), id));
            }
            Err(e) => {
                roll_back(txn, store.entity(), id).await;
                return Err(db_err(e));
            }
        };

        if let Err(e) = store.remove(&txn, id).await {
            roll_back(txn, store.entity(), id).await;
            return Err(db_err(e));
        }

        if let Err(e) = self.dispatch(store.entity(), id, remote(&aggregate)).await {
            roll_back(txn, store.entity(), id).await;
            return Err(e);
        }

        txn.commit().await.map_err(db_err)?;
        Ok(aggregate)
    }

    /// Insert a new aggregate and dispatch its remote operation, commit
    /// only on remote success. Used by the invoice-at-checkout flow.
    pub async fn create<S, R>(
        &self,
        store: &S,
        aggregate: S::Aggregate,
        remote: R,
    ) -> DomainResult<S::Aggregate>
    where
        S: SyncStore,
        R: FnOnce(&S::Aggregate) -> RemoteOp + Send,
    {
        let txn = self.db.begin().await.map_err(db_err)?;

        if let Err(e) = store.insert(&txn, &aggregate).await {
            roll_back_unkeyed(txn, store.entity()).await;
            return Err(db_err(e));
        }

        if let Err(e) = self
            .dispatch(store.entity(), Uuid::nil(), remote(&aggregate))
            .await
        {
            roll_back_unkeyed(txn, store.entity()).await;
            return Err(e);
        }

        txn.commit().await.map_err(db_err)?;
        Ok(aggregate)
    }

    /// Issue the remote call. The pending-operation log line is the
    /// insertion point for a durable outbox: replace it with an outbox
    /// write keyed the same way and the public contract stays intact.
    async fn dispatch(
        &self,
        entity: &'static str,
        aggregate_id: Uuid,
        op: RemoteOp,
    ) -> DomainResult<()> {
        info!(
            entity,
            aggregate_id = %aggregate_id,
            operation = op.kind(),
            remote_id = op.remote_id(),
            "dispatching pending billing operation"
        );

        let outcome = match op {
            RemoteOp::UpdateProfile { remote_id, profile } => {
                self.gateway.update_customer(&remote_id, &profile).await
            }
            RemoteOp::DeleteProfile { remote_id } => {
                self.gateway.delete_customer(&remote_id).await
            }
            RemoteOp::UpdatePaymentIntentAmount {
                remote_id,
                amount_cents,
            } => {
                self.gateway
                    .update_payment_intent_amount(&remote_id, amount_cents)
                    .await
            }
            RemoteOp::CapturePaymentIntent {
                remote_id,
                amount_cents,
            } => {
                self.gateway
                    .capture_payment_intent(&remote_id, amount_cents)
                    .await
            }
            RemoteOp::CancelPaymentIntent { remote_id } => {
                self.gateway.cancel_payment_intent(&remote_id).await
            }
        };

        outcome.map_err(|e| match e {
            GatewayError::Rejected(reason) => DomainError::RemoteRejected(reason),
            GatewayError::Unreachable(reason) => DomainError::RemoteUnreachable(reason),
        })
    }
}

async fn roll_back(txn: DatabaseTransaction, entity: &'static str, id: Uuid) {
    if let Err(e) = txn.rollback().await {
        warn!(entity, aggregate_id = %id, error = %e, "rollback failed");
    }
}

async fn roll_back_unkeyed(txn: DatabaseTransaction, entity: &'static str) {
    if let Err(e) = txn.rollback().await {
        warn!(entity, error = %e, "rollback failed");
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::customer::Customer;
    use crate::domain::customer::CustomerRepository;
    use crate::domain::ports::BillingProfile;
    use crate::domain::value_objects::{Address, Email, PersonName, Phone};
    use crate::infrastructure::billing::RecordingBillingGateway;
    use crate::infrastructure::database::repositories::{
        CustomerStore, SeaOrmCustomerRepository,
    };
    use crate::infrastructure::database::test_support::in_memory_db;

    fn jane() -> Customer {
        Customer::new(
            PersonName::new("Jane", "Doe").unwrap(),
            Email::new("jane@example.com").unwrap(),
            Phone::new("+5511987654321").unwrap(),
            Address::new("Brazil", "São Paulo", "Rua Augusta", 120).unwrap(),
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            "cus_123",
        )
    }

    fn update_profile_op(c: &Customer) -> RemoteOp {
        RemoteOp::UpdateProfile {
            remote_id: c.billing_customer_id.clone(),
            profile: c.billing_profile(),
        }
    }

    struct Fixture {
        sync: Synchronizer,
        repo: SeaOrmCustomerRepository,
        gateway: Arc<RecordingBillingGateway>,
    }

    async fn fixture_with(customer: Customer) -> Fixture {
        let db = in_memory_db().await;
        let repo = SeaOrmCustomerRepository::new(db.clone());
        repo.save(customer).await.unwrap();
        let gateway = Arc::new(RecordingBillingGateway::new());
        let sync = Synchronizer::new(db, gateway.clone());
        Fixture {
            sync,
            repo,
            gateway,
        }
    }

    #[tokio::test]
    async fn commit_on_remote_success() {
        let customer = jane();
        let id = customer.id;
        let f = fixture_with(customer).await;

        let updated = f
            .sync
            .execute(
                &CustomerStore,
                id,
                |c| {
                    c.change_name(PersonName::new("Jane", "Smith").unwrap());
                    Ok(())
                },
                update_profile_op,
            )
            .await
            .unwrap();
        assert_eq!(updated.name.full(), "Jane Smith");

        // persisted state reflects exactly the mutation, remote id intact
        let stored = f.repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.name.full(), "Jane Smith");
        assert_eq!(stored.billing_customer_id, "cus_123");

        let calls = f.gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].op, "billing.update_profile");
        assert_eq!(calls[0].remote_id, "cus_123");
    }

    #[tokio::test]
    async fn remote_rejection_rolls_back_local_write() {
        let customer = jane();
        let id = customer.id;
        let before = customer.clone();
        let f = fixture_with(customer).await;
        f.gateway
            .set_failure(Some(GatewayError::Rejected("invalid profile".into())));

        let err = f
            .sync
            .execute(
                &CustomerStore,
                id,
                |c| {
                    c.change_name(PersonName::new("Jane", "Error").unwrap());
                    Ok(())
                },
                update_profile_op,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RemoteRejected(_)));

        // atomicity: persisted state equals the pre-call state
        let stored = f.repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.name, before.name);
        assert_eq!(stored.billing_customer_id, before.billing_customer_id);
    }

    #[tokio::test]
    async fn unreachable_provider_rolls_back_and_is_retryable() {
        let customer = jane();
        let id = customer.id;
        let f = fixture_with(customer).await;
        f.gateway
            .set_failure(Some(GatewayError::Unreachable("timeout".into())));

        let err = f
            .sync
            .execute(
                &CustomerStore,
                id,
                |c| {
                    c.change_name(PersonName::new("Jane", "Smith").unwrap());
                    Ok(())
                },
                update_profile_op,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RemoteUnreachable(_)));
        assert!(err.is_retryable());

        let stored = f.repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.name.full(), "Jane Doe");
    }

    #[tokio::test]
    async fn mutation_failure_issues_no_remote_call() {
        let customer = jane();
        let id = customer.id;
        let f = fixture_with(customer).await;

        let err = f
            .sync
            .execute(
                &CustomerStore,
                id,
                |_c| Err(DomainError::Validation("nope".into())),
                update_profile_op,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(f.gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_aggregate_fails_before_any_remote_call() {
        let f = fixture_with(jane()).await;

        let err = f
            .sync
            .execute(
                &CustomerStore,
                Uuid::new_v4(),
                |_c| Ok(()),
                update_profile_op,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(f.gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn repeating_a_successful_update_is_idempotent() {
        let customer = jane();
        let id = customer.id;
        let f = fixture_with(customer).await;

        for _ in 0..2 {
            f.sync
                .execute(
                    &CustomerStore,
                    id,
                    |c| {
                        c.change_name(PersonName::new("Jane", "Smith").unwrap());
                        Ok(())
                    },
                    update_profile_op,
                )
                .await
                .unwrap();
        }

        let stored = f.repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.name.full(), "Jane Smith");
        assert_eq!(stored.billing_customer_id, "cus_123");
        assert_eq!(f.gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn remove_deletes_locally_only_on_remote_success() {
        let customer = jane();
        let id = customer.id;
        let f = fixture_with(customer).await;

        f.sync
            .remove(&CustomerStore, id, |c: &Customer| RemoteOp::DeleteProfile {
                remote_id: c.billing_customer_id.clone(),
            })
            .await
            .unwrap();
        assert!(f.repo.find_by_id(id).await.unwrap().is_none());

        let calls = f.gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].op, "billing.delete_profile");
    }

    #[tokio::test]
    async fn remove_keeps_row_when_remote_fails() {
        let customer = jane();
        let id = customer.id;
        let f = fixture_with(customer).await;
        f.gateway
            .set_failure(Some(GatewayError::Unreachable("timeout".into())));

        let err = f
            .sync
            .remove(&CustomerStore, id, |c: &Customer| RemoteOp::DeleteProfile {
                remote_id: c.billing_customer_id.clone(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RemoteUnreachable(_)));
        assert!(f.repo.find_by_id(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn create_rolls_back_insert_when_remote_fails() {
        let db = in_memory_db().await;
        let repo = SeaOrmCustomerRepository::new(db.clone());
        let gateway = Arc::new(RecordingBillingGateway::new());
        gateway.set_failure(Some(GatewayError::Rejected("card declined".into())));
        let sync = Synchronizer::new(db, gateway);

        let customer = jane();
        let id = customer.id;
        let err = sync
            .create(&CustomerStore, customer, |c: &Customer| {
                RemoteOp::UpdateProfile {
                    remote_id: c.billing_customer_id.clone(),
                    profile: BillingProfile {
                        name: c.name.full(),
                        email: c.email.as_str().into(),
                        phone: c.phone.as_str().into(),
                        address: c.address.to_string(),
                    },
                }
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RemoteRejected(_)));
        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }
}
