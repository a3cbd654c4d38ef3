//! Postal address value object

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// Street address with country/city/number. Kept as one unit because the
/// billing provider's profile representation is not field-granular.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    country: String,
    city: String,
    street: String,
    number: i32,
}

impl Address {
    pub fn new(country: &str, city: &str, street: &str, number: i32) -> DomainResult<Self> {
        let country = country.trim();
        let city = city.trim();
        let street = street.trim();

        if country.is_empty() || city.is_empty() || street.is_empty() {
            return Err(DomainError::Validation(
                "address fields must not be empty".to_string(),
            ));
        }
        if number <= 0 {
            return Err(DomainError::Validation(
                "address number must be positive".to_string(),
            ));
        }

        Ok(Self {
            country: country.to_string(),
            city: city.to_string(),
            street: street.to_string(),
            number,
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> i32 {
        self.number
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}, {}, {}",
            self.street, self.number, self.city, self.country
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_single_line() {
        let a = Address::new("Brazil", "São Paulo", "Rua Augusta", 120).unwrap();
        assert_eq!(a.to_string(), "Rua Augusta 120, São Paulo, Brazil");
    }

    #[test]
    fn rejects_blank_fields_and_bad_number() {
        assert!(Address::new("", "City", "Street", 1).is_err());
        assert!(Address::new("BR", "City", "Street", 0).is_err());
    }
}
