//! Employees module: DTOs and handlers

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
