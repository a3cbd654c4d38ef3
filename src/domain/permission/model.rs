//! Permission domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Named capability grantable to employees and admins
/// (e.g. "reservations.write").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permission {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl Permission {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            is_enabled: true,
            created_at: Utc::now(),
        }
    }

    pub fn disable(&mut self) {
        self.is_enabled = false;
    }

    pub fn enable(&mut self) {
        self.is_enabled = true;
    }
}
