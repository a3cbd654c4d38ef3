//! # Hotel Back Office
//!
//! Hotel management back office: rooms, guests, reservations, staff and
//! check-out invoicing. Local state lives in SQLite via SeaORM and is kept
//! in lock-step with a Stripe-compatible billing provider: every mutation
//! that the provider must see runs through a transaction synchronizer that
//! commits locally only after the provider accepted the change.
//!
//! ## Architecture
//!
//! - **domain**: Entities, value objects, repository traits, billing port
//! - **application**: Use-case handlers and the transaction synchronizer
//! - **infrastructure**: SeaORM persistence and billing gateway clients
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Cross-cutting helpers (retry)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::{create_api_router, AppState};
