//! Core business entities, value objects and repository traits

pub mod admin;
pub mod customer;
pub mod employee;
pub mod error;
pub mod invoice;
pub mod permission;
pub mod ports;
pub mod repositories;
pub mod reservation;
pub mod room;
pub mod service;
pub mod value_objects;

pub use error::{db_err, DomainError, DomainResult};
pub use repositories::RepositoryProvider;
