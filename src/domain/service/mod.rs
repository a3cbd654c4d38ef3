//! Hotel service aggregate (room service, spa, laundry, ...)

pub mod model;
pub mod repository;

pub use model::{Service, ServicePriority};
pub use repository::ServiceRepository;
