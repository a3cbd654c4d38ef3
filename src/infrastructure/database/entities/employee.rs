//! Employee entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub first_name: String,
    pub last_name: String,

    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,

    pub date_of_birth: Date,
    pub salary_cents: i64,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee_permission::Entity")]
    PermissionLinks,
}

impl Related<super::employee_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PermissionLinks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
