//! Use-case handlers, one per aggregate

pub mod admin;
pub mod customer;
pub mod employee;
pub mod invoice;
pub mod permission;
pub mod reservation;
pub mod room;
pub mod service;

pub use admin::AdminHandler;
pub use customer::CustomerHandler;
pub use employee::EmployeeHandler;
pub use invoice::InvoiceHandler;
pub use permission::PermissionHandler;
pub use reservation::ReservationHandler;
pub use room::RoomHandler;
pub use service::ServiceHandler;
