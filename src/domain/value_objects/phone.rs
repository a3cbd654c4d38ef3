//! Phone value object

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// E.164-style phone number: `+` followed by 10 to 15 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: &str) -> DomainResult<Self> {
        let phone = phone.trim();

        let Some(rest) = phone.strip_prefix('+') else {
            return Err(DomainError::Validation(
                "phone must start with a country code (+55, +1, ...)".to_string(),
            ));
        };

        let digits = rest.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < 10 || digits > 15 || rest.chars().any(|c| !c.is_ascii_digit()) {
            return Err(DomainError::Validation(
                "phone must have 10 to 15 digits after the country code".to_string(),
            ));
        }

        Ok(Self(phone.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_e164() {
        assert!(Phone::new("+5511987654321").is_ok());
        assert!(Phone::new(" +14155550123 ").is_ok());
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(Phone::new("5511987654321").is_err()); // no plus
        assert!(Phone::new("+55119").is_err()); // too short
        assert!(Phone::new("+55 11 98765-4321").is_err()); // separators
    }
}
