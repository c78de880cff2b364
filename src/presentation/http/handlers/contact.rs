//! Contact Handlers

use axum::{extract::State, Json};
use chrono::Local;

use crate::application::dto::{
    ContactRequest, ContactResponse, ListContactsQuery, SearchContactsQuery,
};
use crate::application::services::ContactService;
use crate::domain::ContactDetails;
use crate::presentation::http::extractors::{ContactId, ValidatedJson, ValidatedQuery};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a contact
pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let details = ContactDetails::try_from(body)?;

    let contact = state.contact_service().create_contact(details).await?;

    Ok(Json(ContactResponse::from(contact)))
}

/// List contacts with offset pagination
pub async fn list_contacts(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListContactsQuery>,
) -> Result<Json<Vec<ContactResponse>>, AppError> {
    let contacts = state
        .contact_service()
        .list_contacts(query.skip, query.limit)
        .await?;

    Ok(Json(ContactResponse::from_contacts(contacts)))
}

/// Get contact by ID
pub async fn get_contact(
    State(state): State<AppState>,
    ContactId(contact_id): ContactId,
) -> Result<Json<ContactResponse>, AppError> {
    let contact = state.contact_service().get_contact(contact_id).await?;

    Ok(Json(ContactResponse::from(contact)))
}

/// Replace every field of a contact
pub async fn update_contact(
    State(state): State<AppState>,
    ContactId(contact_id): ContactId,
    ValidatedJson(body): ValidatedJson<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let details = ContactDetails::try_from(body)?;

    let contact = state
        .contact_service()
        .update_contact(contact_id, details)
        .await?;

    Ok(Json(ContactResponse::from(contact)))
}

/// Delete a contact and return its final state
pub async fn delete_contact(
    State(state): State<AppState>,
    ContactId(contact_id): ContactId,
) -> Result<Json<ContactResponse>, AppError> {
    let contact = state.contact_service().delete_contact(contact_id).await?;

    Ok(Json(ContactResponse::from(contact)))
}

/// Search contacts by first name, last name or email
pub async fn search_contacts(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<SearchContactsQuery>,
) -> Result<Json<Vec<ContactResponse>>, AppError> {
    let contacts = state.contact_service().search_contacts(&query.query).await?;

    Ok(Json(ContactResponse::from_contacts(contacts)))
}

/// Contacts with a birthday in the upcoming window, starting today (server local date)
pub async fn upcoming_birthdays(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactResponse>>, AppError> {
    let today = Local::now().date_naive();

    let contacts = state.contact_service().upcoming_birthdays(today).await?;

    Ok(Json(ContactResponse::from_contacts(contacts)))
}
