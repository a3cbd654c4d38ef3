//! Admin aggregate

pub mod model;
pub mod repository;

pub use model::Admin;
pub use repository::AdminRepository;
