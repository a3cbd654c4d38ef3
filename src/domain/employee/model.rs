//! Employee domain entity

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::value_objects::{Email, PersonName, Phone};

/// Staff member. Permissions are linked separately through the
/// employee repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: Uuid,
    pub name: PersonName,
    pub email: Email,
    pub phone: Phone,
    pub date_of_birth: NaiveDate,
    pub salary_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn new(
        name: PersonName,
        email: Email,
        phone: Phone,
        date_of_birth: NaiveDate,
        salary_cents: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            date_of_birth,
            salary_cents,
            created_at: Utc::now(),
        }
    }

    pub fn change_name(&mut self, name: PersonName) {
        self.name = name;
    }

    pub fn change_salary(&mut self, salary_cents: i64) {
        self.salary_cents = salary_cents;
    }
}
