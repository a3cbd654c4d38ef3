//! Infrastructure adapters: persistence and the billing provider

pub mod billing;
pub mod database;

pub use billing::{HttpBillingGateway, RecordingBillingGateway};
pub use database::repositories::SeaOrmRepositoryProvider;
pub use database::{init_database, DatabaseConfig};
