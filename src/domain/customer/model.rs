//! Customer domain entity

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::ports::BillingProfile;
use crate::domain::value_objects::{Address, Email, PersonName, Phone};

/// Hotel guest with a billing-provider counterpart.
///
/// `billing_customer_id` is the remote counterpart identifier: set when
/// the profile is created at the provider and only touched again by the
/// creation/deletion flows.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: Uuid,
    pub name: PersonName,
    pub email: Email,
    pub phone: Phone,
    pub address: Address,
    pub date_of_birth: NaiveDate,
    pub billing_customer_id: String,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(
        name: PersonName,
        email: Email,
        phone: Phone,
        address: Address,
        date_of_birth: NaiveDate,
        billing_customer_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            address,
            date_of_birth,
            billing_customer_id: billing_customer_id.into(),
            created_at: Utc::now(),
        }
    }

    pub fn change_name(&mut self, name: PersonName) {
        self.name = name;
    }

    pub fn change_email(&mut self, email: Email) {
        self.email = email;
    }

    pub fn change_phone(&mut self, phone: Phone) {
        self.phone = phone;
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = address;
    }

    pub fn change_date_of_birth(&mut self, date_of_birth: NaiveDate) {
        self.date_of_birth = date_of_birth;
    }

    /// Full contact profile as the billing provider stores it.
    pub fn billing_profile(&self) -> BillingProfile {
        BillingProfile {
            name: self.name.full(),
            email: self.email.as_str().to_string(),
            phone: self.phone.as_str().to_string(),
            address: self.address.to_string(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customer() -> Customer {
        Customer::new(
            PersonName::new("Jane", "Doe").unwrap(),
            Email::new("jane@example.com").unwrap(),
            Phone::new("+5511987654321").unwrap(),
            Address::new("Brazil", "São Paulo", "Rua Augusta", 120).unwrap(),
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            "cus_123",
        )
    }

    #[test]
    fn billing_profile_carries_full_contact_data() {
        let c = sample_customer();
        let profile = c.billing_profile();
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email, "jane@example.com");
        assert_eq!(profile.phone, "+5511987654321");
        assert_eq!(profile.address, "Rua Augusta 120, São Paulo, Brazil");
    }

    #[test]
    fn change_name_leaves_remote_id_untouched() {
        let mut c = sample_customer();
        c.change_name(PersonName::new("Jane", "Smith").unwrap());
        assert_eq!(c.name.full(), "Jane Smith");
        assert_eq!(c.billing_customer_id, "cus_123");
    }
}
