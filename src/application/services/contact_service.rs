//! Contact Service
//!
//! Handles contact management operations.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{BirthdayWindow, Contact, ContactDetails, ContactRepository};
use crate::shared::error::AppError;

/// Contact service trait
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Store a new contact
    async fn create_contact(&self, details: ContactDetails) -> Result<Contact, ContactError>;

    /// Page through contacts in id order
    async fn list_contacts(&self, skip: i64, limit: i64) -> Result<Vec<Contact>, ContactError>;

    /// Get contact by ID
    async fn get_contact(&self, contact_id: i64) -> Result<Contact, ContactError>;

    /// Replace every field of a contact
    async fn update_contact(&self, contact_id: i64, details: ContactDetails) -> Result<Contact, ContactError>;

    /// Delete a contact, returning what was removed
    async fn delete_contact(&self, contact_id: i64) -> Result<Contact, ContactError>;

    /// Search by first name, last name or email
    async fn search_contacts(&self, query: &str) -> Result<Vec<Contact>, ContactError>;

    /// Contacts with a birthday between `today` and the end of the configured window
    async fn upcoming_birthdays(&self, today: NaiveDate) -> Result<Vec<Contact>, ContactError>;
}

/// Contact service errors
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Contact not found")]
    NotFound(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for ContactError {
    fn from(err: AppError) -> Self {
        ContactError::Internal(err.to_string())
    }
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::NotFound(_) => AppError::NotFound("Contact not found".into()),
            ContactError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// ContactService implementation
pub struct ContactServiceImpl<R>
where
    R: ContactRepository + ?Sized,
{
    contact_repo: Arc<R>,
    birthday_window_days: u32,
}

impl<R> ContactServiceImpl<R>
where
    R: ContactRepository + ?Sized,
{
    pub fn new(contact_repo: Arc<R>, birthday_window_days: u32) -> Self {
        Self {
            contact_repo,
            birthday_window_days,
        }
    }
}

#[async_trait]
impl<R> ContactService for ContactServiceImpl<R>
where
    R: ContactRepository + ?Sized + 'static,
{
    async fn create_contact(&self, details: ContactDetails) -> Result<Contact, ContactError> {
        let contact = self.contact_repo.create(&details).await?;

        tracing::info!(contact_id = contact.id, "Contact created");
        Ok(contact)
    }

    async fn list_contacts(&self, skip: i64, limit: i64) -> Result<Vec<Contact>, ContactError> {
        let contacts = self.contact_repo.list(skip, limit).await?;

        tracing::debug!(skip, limit, returned = contacts.len(), "Listed contacts");
        Ok(contacts)
    }

    async fn get_contact(&self, contact_id: i64) -> Result<Contact, ContactError> {
        self.contact_repo
            .find_by_id(contact_id)
            .await?
            .ok_or(ContactError::NotFound(contact_id))
    }

    async fn update_contact(&self, contact_id: i64, details: ContactDetails) -> Result<Contact, ContactError> {
        let contact = self
            .contact_repo
            .update(contact_id, &details)
            .await?
            .ok_or(ContactError::NotFound(contact_id))?;

        tracing::info!(contact_id, "Contact updated");
        Ok(contact)
    }

    async fn delete_contact(&self, contact_id: i64) -> Result<Contact, ContactError> {
        let contact = self
            .contact_repo
            .delete(contact_id)
            .await?
            .ok_or(ContactError::NotFound(contact_id))?;

        tracing::info!(contact_id, name = %contact.full_name(), "Contact deleted");
        Ok(contact)
    }

    async fn search_contacts(&self, query: &str) -> Result<Vec<Contact>, ContactError> {
        let contacts = self.contact_repo.search(query).await?;

        tracing::debug!(matches = contacts.len(), "Contact search finished");
        Ok(contacts)
    }

    async fn upcoming_birthdays(&self, today: NaiveDate) -> Result<Vec<Contact>, ContactError> {
        let window = BirthdayWindow::starting(today, self.birthday_window_days);
        let contacts = self.contact_repo.find_birthdays_in(&window).await?;

        tracing::debug!(
            from = %window.start(),
            to = %window.end(),
            matches = contacts.len(),
            "Upcoming birthdays resolved"
        );
        Ok(contacts)
    }
}
