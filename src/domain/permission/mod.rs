//! Permission aggregate

pub mod model;
pub mod repository;

pub use model::Permission;
pub use repository::PermissionRepository;
