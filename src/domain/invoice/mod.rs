//! Invoice aggregate

pub mod model;
pub mod repository;

pub use model::{Invoice, PaymentMethod};
pub use repository::InvoiceRepository;
