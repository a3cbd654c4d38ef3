//! SeaORM entity definitions

pub mod admin;
pub mod admin_permission;
pub mod customer;
pub mod employee;
pub mod employee_permission;
pub mod invoice;
pub mod permission;
pub mod reservation;
pub mod room;
pub mod service;
