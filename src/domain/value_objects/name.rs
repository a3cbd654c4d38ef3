//! Person name value object

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// First/last name pair. Both parts must be non-empty and within 60 chars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    first: String,
    last: String,
}

impl PersonName {
    pub fn new(first: &str, last: &str) -> DomainResult<Self> {
        let first = first.trim();
        let last = last.trim();

        if first.is_empty() || last.is_empty() {
            return Err(DomainError::Validation(
                "name parts must not be empty".to_string(),
            ));
        }
        if first.len() > 60 || last.len() > 60 {
            return Err(DomainError::Validation(
                "name parts must be at most 60 characters".to_string(),
            ));
        }

        Ok(Self {
            first: first.to_string(),
            last: last.to_string(),
        })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    /// "First Last" form, used for the billing profile.
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_trimmed_name() {
        let name = PersonName::new("  Jane ", "Doe").unwrap();
        assert_eq!(name.first(), "Jane");
        assert_eq!(name.full(), "Jane Doe");
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(PersonName::new("", "Doe").is_err());
        assert!(PersonName::new("Jane", "   ").is_err());
    }

    #[test]
    fn rejects_oversized_parts() {
        let long = "x".repeat(61);
        assert!(PersonName::new(&long, "Doe").is_err());
    }
}
