//! # Domain Layer
//!
//! The domain layer contains the core rules of the contact book.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: The Contact entity and its repository trait
//! - **value_objects**: Immutable value types (Birthdate)
//! - **services**: Domain logic that does not belong to one record (BirthdayWindow)

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
pub use value_objects::*;
