//! Contact entity and repository trait.
//!
//! Maps to the `contacts` table in the database schema.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::services::BirthdayWindow;
use crate::shared::error::AppError;

/// Every field of a contact except its identifier.
///
/// This is the canonical record shape: creation and full replacement both
/// take a `ContactDetails`, and the response projection is built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birthdate: NaiveDate,
    pub additional_info: Option<String>,
}

/// A stored contact.
///
/// Maps to the `contacts` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - first_name: TEXT NOT NULL
/// - last_name: TEXT NOT NULL
/// - email: TEXT NOT NULL
/// - phone_number: TEXT NOT NULL
/// - birthdate: DATE NOT NULL
/// - additional_info: TEXT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Database assigned identifier, never changes
    pub id: i64,

    #[serde(flatten)]
    pub details: ContactDetails,
}

impl Contact {
    pub fn new(id: i64, details: ContactDetails) -> Self {
        Self { id, details }
    }

    /// Replace every field but the id.
    pub fn replace_details(&mut self, details: ContactDetails) {
        self.details = details;
    }

    /// Case-insensitive substring match on first name, last name or email.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        [
            &self.details.first_name,
            &self.details.last_name,
            &self.details.email,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Full name for log lines.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.details.first_name, self.details.last_name)
    }
}

/// Repository trait for Contact data access operations.
///
/// Implementations of this trait handle the actual storage interactions.
/// Lookups by id return `Ok(None)` when the row does not exist; callers
/// decide how to report it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a new contact and return it with its assigned id.
    async fn create(&self, details: &ContactDetails) -> Result<Contact, AppError>;

    /// Contacts in ascending id order, skipping `skip` and returning at most `limit`.
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Contact>, AppError>;

    /// Find a contact by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, AppError>;

    /// Overwrite every field of an existing contact in a single step.
    async fn update(&self, id: i64, details: &ContactDetails) -> Result<Option<Contact>, AppError>;

    /// Remove a contact and return its last state.
    async fn delete(&self, id: i64) -> Result<Option<Contact>, AppError>;

    /// Case-insensitive substring search over first name, last name and email.
    async fn search(&self, query: &str) -> Result<Vec<Contact>, AppError>;

    /// Contacts whose birthday anniversary falls inside the window.
    async fn find_birthdays_in(&self, window: &BirthdayWindow) -> Result<Vec<Contact>, AppError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
