//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories, the transactional sync stores and
//! the unified RepositoryProvider.

pub mod admin_repository;
pub mod customer_repository;
pub mod employee_repository;
pub mod invoice_repository;
pub mod permission_repository;
pub mod repository_provider;
pub mod reservation_repository;
pub mod room_repository;
pub mod service_repository;
pub mod sync_stores;

pub use admin_repository::SeaOrmAdminRepository;
pub use customer_repository::SeaOrmCustomerRepository;
pub use employee_repository::SeaOrmEmployeeRepository;
pub use invoice_repository::SeaOrmInvoiceRepository;
pub use permission_repository::SeaOrmPermissionRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use reservation_repository::SeaOrmReservationRepository;
pub use room_repository::SeaOrmRoomRepository;
pub use service_repository::SeaOrmServiceRepository;
pub use sync_stores::{CustomerStore, InvoiceStore, ReservationStore};
