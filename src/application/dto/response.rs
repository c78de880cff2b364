//! Response DTOs
//!
//! Data structures for API response bodies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Contact;

/// Contact projection returned by every contact endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    /// ISO 8601 calendar date (`YYYY-MM-DD`)
    pub birthdate: NaiveDate,
    pub additional_info: Option<String>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        let details = contact.details;
        Self {
            id: contact.id,
            first_name: details.first_name,
            last_name: details.last_name,
            email: details.email,
            phone_number: details.phone_number,
            birthdate: details.birthdate,
            additional_info: details.additional_info,
        }
    }
}

impl ContactResponse {
    /// Project a list of contacts, keeping storage order.
    pub fn from_contacts(contacts: Vec<Contact>) -> Vec<Self> {
        contacts.into_iter().map(Self::from).collect()
    }
}
