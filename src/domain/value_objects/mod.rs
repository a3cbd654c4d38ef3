//! Validated value objects for contact data
//!
//! Each value object performs its own format validation in `new`;
//! invalid input never reaches a repository or the billing gateway.

mod address;
mod email;
mod name;
mod phone;

pub use address::Address;
pub use email::Email;
pub use name::PersonName;
pub use phone::Phone;
