//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::room::{Room, RoomRepository, RoomStatus};
use crate::domain::{db_err, DomainError, DomainResult};
use crate::infrastructure::database::entities::room;

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn room_from_model(model: room::Model) -> Room {
    Room {
        id: model.id,
        number: model.number,
        capacity: model.capacity,
        price_cents: model.price_cents,
        status: RoomStatus::from_str(&model.status),
        created_at: model.created_at,
    }
}

fn room_active_model(r: &Room) -> room::ActiveModel {
    room::ActiveModel {
        id: Set(r.id),
        number: Set(r.number),
        capacity: Set(r.capacity),
        price_cents: Set(r.price_cents),
        status: Set(r.status.as_str().to_string()),
        created_at: Set(r.created_at),
    }
}

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn save(&self, r: Room) -> DomainResult<()> {
        debug!("Saving room: {}", r.number);

        let existing = room::Entity::find()
            .filter(room::Column::Number.eq(r.number))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(DomainError::Conflict(format!(
                "room number {} already exists",
                r.number
            )));
        }

        room_active_model(&r)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Room>> {
        let model = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(room_from_model))
    }

    async fn find_by_number(&self, number: i32) -> DomainResult<Option<Room>> {
        let model = room::Entity::find()
            .filter(room::Column::Number.eq(number))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(room_from_model))
    }

    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        let models = room::Entity::find()
            .order_by_asc(room::Column::Number)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(room_from_model).collect())
    }

    async fn update(&self, r: Room) -> DomainResult<()> {
        debug!("Updating room: {}", r.number);

        let existing = room::Entity::find_by_id(r.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_none() {
            return Err(DomainError::not_found("Room", r.id));
        }

        room_active_model(&r)
            .update(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = room::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Room", id));
        }
        Ok(())
    }
}
