//! Email value object

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// Normalized (trimmed, lowercased) email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(email: &str) -> DomainResult<Self> {
        let email = email.trim().to_lowercase();

        if email.len() > 254 {
            return Err(DomainError::Validation(
                "email must be at most 254 characters".to_string(),
            ));
        }

        // local@domain with a dot somewhere in the domain part
        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.ends_with('.')
            }
            None => false,
        };
        if !valid {
            return Err(DomainError::Validation(format!(
                "invalid email format: {}",
                email
            )));
        }

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        let email = Email::new("  Jane.Doe@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "jane.doe@example.com");
    }

    #[test]
    fn rejects_missing_at_or_domain_dot() {
        assert!(Email::new("janedoe.example.com").is_err());
        assert!(Email::new("jane@localhost").is_err());
        assert!(Email::new("jane@example.").is_err());
        assert!(Email::new("@example.com").is_err());
    }
}
