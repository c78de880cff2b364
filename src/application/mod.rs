//! Application Layer
//!
//! Contains the contact service and the request/response DTOs. This layer
//! sits between the HTTP handlers and the domain repository trait.

pub mod dto;
pub mod services;
