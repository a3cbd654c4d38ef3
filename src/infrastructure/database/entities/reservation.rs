//! Reservation entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub room_id: Uuid,
    pub customer_id: Uuid,

    pub expected_check_in: DateTimeUtc,
    pub expected_check_out: DateTimeUtc,

    #[sea_orm(nullable)]
    pub check_in: Option<DateTimeUtc>,
    #[sea_orm(nullable)]
    pub check_out: Option<DateTimeUtc>,

    /// Nightly rate snapshot taken from the room at booking time
    pub daily_rate_cents: i64,

    /// Reservation status: Created, CheckedIn, CheckedOut, Cancelled
    pub status: String,

    /// Remote counterpart id at the billing provider
    pub billing_payment_intent_id: String,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    #[sea_orm(has_many = "super::invoice::Entity")]
    Invoices,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
