//! Repository provider facade

use crate::domain::admin::AdminRepository;
use crate::domain::customer::CustomerRepository;
use crate::domain::employee::EmployeeRepository;
use crate::domain::invoice::InvoiceRepository;
use crate::domain::permission::PermissionRepository;
use crate::domain::reservation::ReservationRepository;
use crate::domain::room::RoomRepository;
use crate::domain::service::ServiceRepository;

/// One accessor per aggregate repository, backed by a single connection
/// pool in the SeaORM implementation.
pub trait RepositoryProvider: Send + Sync {
    fn customers(&self) -> &dyn CustomerRepository;
    fn employees(&self) -> &dyn EmployeeRepository;
    fn admins(&self) -> &dyn AdminRepository;
    fn permissions(&self) -> &dyn PermissionRepository;
    fn rooms(&self) -> &dyn RoomRepository;
    fn services(&self) -> &dyn ServiceRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
    fn invoices(&self) -> &dyn InvoiceRepository;
}
