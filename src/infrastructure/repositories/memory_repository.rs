//! In-Memory Contact Repository
//!
//! Process-local implementation of ContactRepository. Backs the `memory`
//! storage backend and the HTTP test suite.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{BirthdayWindow, Contact, ContactDetails, ContactRepository};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
struct ContactTable {
    /// Keyed by id so iteration follows insertion order
    rows: BTreeMap<i64, Contact>,
    last_id: i64,
}

/// Contact table held behind a read/write lock.
///
/// Ids start at 1 and are never reused, mirroring a `BIGSERIAL` column.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    table: RwLock<ContactTable>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().rows.is_empty()
    }

    fn filtered(&self, predicate: impl Fn(&Contact) -> bool) -> Vec<Contact> {
        self.table
            .read()
            .rows
            .values()
            .filter(|&contact| predicate(contact))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, details: &ContactDetails) -> Result<Contact, AppError> {
        let mut table = self.table.write();
        table.last_id += 1;
        let contact = Contact::new(table.last_id, details.clone());
        table.rows.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Contact>, AppError> {
        let skip = usize::try_from(skip).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(self
            .table
            .read()
            .rows
            .values()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, AppError> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn update(&self, id: i64, details: &ContactDetails) -> Result<Option<Contact>, AppError> {
        let mut table = self.table.write();
        Ok(table.rows.get_mut(&id).map(|contact| {
            contact.replace_details(details.clone());
            contact.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<Option<Contact>, AppError> {
        Ok(self.table.write().rows.remove(&id))
    }

    async fn search(&self, query: &str) -> Result<Vec<Contact>, AppError> {
        Ok(self.filtered(|contact| contact.matches_query(query)))
    }

    async fn find_birthdays_in(&self, window: &BirthdayWindow) -> Result<Vec<Contact>, AppError> {
        Ok(self.filtered(|contact| window.contains(contact.details.birthdate)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
