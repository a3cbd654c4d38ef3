//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::admin::AdminRepository;
use crate::domain::customer::CustomerRepository;
use crate::domain::employee::EmployeeRepository;
use crate::domain::invoice::InvoiceRepository;
use crate::domain::permission::PermissionRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;
use crate::domain::room::RoomRepository;
use crate::domain::service::ServiceRepository;

use super::admin_repository::SeaOrmAdminRepository;
use super::customer_repository::SeaOrmCustomerRepository;
use super::employee_repository::SeaOrmEmployeeRepository;
use super::invoice_repository::SeaOrmInvoiceRepository;
use super::permission_repository::SeaOrmPermissionRepository;
use super::reservation_repository::SeaOrmReservationRepository;
use super::room_repository::SeaOrmRoomRepository;
use super::service_repository::SeaOrmServiceRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let room = repos.rooms().find_by_number(101).await?;
/// let guest = repos.customers().find_by_email("jane@example.com").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    customers: SeaOrmCustomerRepository,
    employees: SeaOrmEmployeeRepository,
    admins: SeaOrmAdminRepository,
    permissions: SeaOrmPermissionRepository,
    rooms: SeaOrmRoomRepository,
    services: SeaOrmServiceRepository,
    reservations: SeaOrmReservationRepository,
    invoices: SeaOrmInvoiceRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            customers: SeaOrmCustomerRepository::new(db.clone()),
            employees: SeaOrmEmployeeRepository::new(db.clone()),
            admins: SeaOrmAdminRepository::new(db.clone()),
            permissions: SeaOrmPermissionRepository::new(db.clone()),
            rooms: SeaOrmRoomRepository::new(db.clone()),
            services: SeaOrmServiceRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db.clone()),
            invoices: SeaOrmInvoiceRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    fn employees(&self) -> &dyn EmployeeRepository {
        &self.employees
    }

    fn admins(&self) -> &dyn AdminRepository {
        &self.admins
    }

    fn permissions(&self) -> &dyn PermissionRepository {
        &self.permissions
    }

    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn services(&self) -> &dyn ServiceRepository {
        &self.services
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }

    fn invoices(&self) -> &dyn InvoiceRepository {
        &self.invoices
    }
}
