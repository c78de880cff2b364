//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::{Birthdate, ContactDetails};
use crate::shared::error::AppError;

/// Default and maximum page size for contact listings.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Create or replace contact request.
///
/// The same shape is used for `POST /contacts/` and `PUT /contacts/{id}`;
/// an update resends every field.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: String,

    pub email: String,

    pub phone_number: String,

    /// `dd.mm.yyyy`
    #[validate(custom(function = "validate_birthdate"))]
    pub birthdate: String,

    pub additional_info: Option<String>,
}

fn validate_birthdate(value: &str) -> Result<(), ValidationError> {
    Birthdate::parse(value)
        .map(|_| ())
        .map_err(|e| ValidationError::new("birthdate").with_message(e.to_string().into()))
}

impl TryFrom<ContactRequest> for ContactDetails {
    type Error = AppError;

    fn try_from(request: ContactRequest) -> Result<Self, Self::Error> {
        let birthdate = Birthdate::parse(&request.birthdate)
            .map_err(|e| AppError::invalid_field("birthdate", e.to_string()))?;

        Ok(Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone_number: request.phone_number,
            birthdate: NaiveDate::from(birthdate),
            additional_info: request.additional_info,
        })
    }
}

/// Contact listing query parameters
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListContactsQuery {
    #[serde(default)]
    #[validate(range(min = 0, message = "skip must be greater than or equal to 0"))]
    pub skip: i64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 0, max = 100, message = "limit must be between 0 and 100"))]
    pub limit: i64,
}

fn default_limit() -> i64 {
    MAX_PAGE_LIMIT
}

impl Default for ListContactsQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

/// Contact search query parameters
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchContactsQuery {
    /// Substring matched against first name, last name and email
    pub query: String,
}
