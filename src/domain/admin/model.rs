//! Admin domain entity

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::value_objects::{Email, PersonName, Phone};

/// Back-office administrator. Root admins bypass permission checks
/// entirely; everyone else goes through the linked permission set.
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: Uuid,
    pub name: PersonName,
    pub email: Email,
    pub phone: Phone,
    pub date_of_birth: NaiveDate,
    pub is_root: bool,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn new(
        name: PersonName,
        email: Email,
        phone: Phone,
        date_of_birth: NaiveDate,
        is_root: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            date_of_birth,
            is_root,
            created_at: Utc::now(),
        }
    }

    pub fn change_name(&mut self, name: PersonName) {
        self.name = name;
    }

    pub fn promote_to_root(&mut self) {
        self.is_root = true;
    }
}
