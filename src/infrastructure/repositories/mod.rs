//! Repository Implementations
//!
//! Implementations of the domain `ContactRepository` trait.
//!
//! - **PgContactRepository** - PostgreSQL `contacts` table
//! - **InMemoryContactRepository** - process-local table for development and tests
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use contact_book::domain::ContactRepository;
//! use contact_book::infrastructure::repositories::PgContactRepository;
//!
//! let contacts: Arc<dyn ContactRepository> = Arc::new(PgContactRepository::new(pool));
//! ```

pub mod contact_repository;
pub mod memory_repository;

pub use contact_repository::PgContactRepository;
pub use memory_repository::InMemoryContactRepository;
