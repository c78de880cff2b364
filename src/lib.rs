//! # Contact Book Library
//!
//! This crate provides a contact management service with:
//! - RESTful HTTP API for create, read, update, delete and search
//! - Upcoming birthday queries over a rolling window
//! - PostgreSQL storage, or in-memory storage for development and tests
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Contact entity, repository trait, birthdate rules
//! - **Application Layer**: Contact service and DTOs
//! - **Infrastructure Layer**: Database pool, repository implementations, metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! contact_book/
//! +-- config/         Configuration management
//! +-- domain/         Contact entity, value objects, birthday window
//! +-- application/    Contact service and DTOs
//! +-- infrastructure/ PostgreSQL and in-memory repositories, metrics
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Error types and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core rules
pub mod domain;

// Application layer - Services and DTOs
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
