//! Application layer: use-case handlers and the transaction synchronizer

pub mod handlers;
pub mod sync;

pub use handlers::{
    AdminHandler, CustomerHandler, EmployeeHandler, InvoiceHandler, PermissionHandler,
    ReservationHandler, RoomHandler, ServiceHandler,
};
pub use sync::{SyncStore, Synchronizer};
