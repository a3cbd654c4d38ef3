//! Hotel service domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};

/// Dispatch priority for a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServicePriority {
    Low,
    Medium,
    High,
}

impl ServicePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "High" => Self::High,
            "Medium" => Self::Medium,
            _ => Self::Low,
        }
    }
}

impl std::fmt::Display for ServicePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bookable hotel service (spa session, laundry, room cleaning...).
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub price_cents: i64,
    pub priority: ServicePriority,
    pub duration_minutes: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Service {
    pub fn new(
        name: impl Into<String>,
        price_cents: i64,
        priority: ServicePriority,
        duration_minutes: i32,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "service name must not be empty".to_string(),
            ));
        }
        if price_cents < 0 {
            return Err(DomainError::Validation(
                "service price must not be negative".to_string(),
            ));
        }
        if duration_minutes <= 0 {
            return Err(DomainError::Validation(
                "service duration must be positive".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            price_cents,
            priority,
            duration_minutes,
            is_active: true,
            created_at: Utc::now(),
        })
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_service_is_active() {
        let s = Service::new("Spa", 15_000, ServicePriority::Medium, 60).unwrap();
        assert!(s.is_active);
        assert_eq!(s.priority, ServicePriority::Medium);
    }

    #[test]
    fn rejects_invalid_fields() {
        assert!(Service::new("  ", 100, ServicePriority::Low, 30).is_err());
        assert!(Service::new("Spa", -1, ServicePriority::Low, 30).is_err());
        assert!(Service::new("Spa", 100, ServicePriority::Low, 0).is_err());
    }

    #[test]
    fn priority_roundtrip() {
        for p in &[
            ServicePriority::Low,
            ServicePriority::Medium,
            ServicePriority::High,
        ] {
            assert_eq!(&ServicePriority::from_str(p.as_str()), p);
        }
    }
}
