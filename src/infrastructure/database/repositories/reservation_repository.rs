//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::reservation::{Reservation, ReservationRepository, ReservationStatus};
use crate::domain::{db_err, DomainError, DomainResult};
use crate::infrastructure::database::entities::reservation;

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn reservation_from_model(model: reservation::Model) -> Reservation {
    Reservation {
        id: model.id,
        room_id: model.room_id,
        customer_id: model.customer_id,
        expected_check_in: model.expected_check_in,
        expected_check_out: model.expected_check_out,
        check_in: model.check_in,
        check_out: model.check_out,
        daily_rate_cents: model.daily_rate_cents,
        status: ReservationStatus::from_str(&model.status),
        billing_payment_intent_id: model.billing_payment_intent_id,
        created_at: model.created_at,
    }
}

pub(crate) fn reservation_active_model(r: &Reservation) -> reservation::ActiveModel {
    reservation::ActiveModel {
        id: Set(r.id),
        room_id: Set(r.room_id),
        customer_id: Set(r.customer_id),
        expected_check_in: Set(r.expected_check_in),
        expected_check_out: Set(r.expected_check_out),
        check_in: Set(r.check_in),
        check_out: Set(r.check_out),
        daily_rate_cents: Set(r.daily_rate_cents),
        status: Set(r.status.as_str().to_string()),
        billing_payment_intent_id: Set(r.billing_payment_intent_id.clone()),
        created_at: Set(r.created_at),
    }
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn save(&self, r: Reservation) -> DomainResult<()> {
        debug!("Saving reservation: {}", r.id);
        reservation_active_model(&r)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(reservation_from_model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .order_by_desc(reservation::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(reservation_from_model).collect())
    }

    async fn find_active_for_room(&self, room_id: Uuid) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::RoomId.eq(room_id))
            .filter(reservation::Column::Status.is_in([
                ReservationStatus::Created.as_str(),
                ReservationStatus::CheckedIn.as_str(),
            ]))
            .order_by_asc(reservation::Column::ExpectedCheckIn)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(reservation_from_model).collect())
    }

    async fn find_for_customer(&self, customer_id: Uuid) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::CustomerId.eq(customer_id))
            .order_by_desc(reservation::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(reservation_from_model).collect())
    }

    async fn update(&self, r: Reservation) -> DomainResult<()> {
        debug!("Updating reservation: {}", r.id);

        let existing = reservation::Entity::find_by_id(r.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Reservation", r.id));
        }

        reservation_active_model(&r)
            .update(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = reservation::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Reservation", id));
        }
        Ok(())
    }
}
