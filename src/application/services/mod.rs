//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ContactService**: Contact CRUD, search and upcoming birthdays

pub mod contact_service;

pub use contact_service::{ContactError, ContactService, ContactServiceImpl};
