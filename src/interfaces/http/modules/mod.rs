//! HTTP modules, one per aggregate

pub mod admins;
pub mod customers;
pub mod employees;
pub mod health;
pub mod invoices;
pub mod permissions;
pub mod reservations;
pub mod rooms;
pub mod services;
