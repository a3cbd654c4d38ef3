//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_rooms;
mod m20250101_000002_create_customers;
mod m20250101_000003_create_employees;
mod m20250101_000004_create_admins;
mod m20250101_000005_create_permissions;
mod m20250101_000006_create_permission_links;
mod m20250101_000007_create_services;
mod m20250101_000008_create_reservations;
mod m20250101_000009_create_invoices;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_rooms::Migration),
            Box::new(m20250101_000002_create_customers::Migration),
            Box::new(m20250101_000003_create_employees::Migration),
            Box::new(m20250101_000004_create_admins::Migration),
            Box::new(m20250101_000005_create_permissions::Migration),
            Box::new(m20250101_000006_create_permission_links::Migration),
            Box::new(m20250101_000007_create_services::Migration),
            Box::new(m20250101_000008_create_reservations::Migration),
            Box::new(m20250101_000009_create_invoices::Migration),
        ]
    }
}
