//! # Domain Entities
//!
//! The contact book stores a single flat entity, the Contact. The repository
//! trait lives next to it and is implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod contact;

pub use contact::{Contact, ContactDetails, ContactRepository};

#[cfg(test)]
pub use contact::MockContactRepository;
