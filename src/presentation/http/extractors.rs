//! Custom Extractors
//!
//! Axum extractors that turn malformed input into structured `AppError`
//! validation responses instead of axum's plain-text rejections.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::shared::error::AppError;
use crate::shared::validation::{field_from_serde_message, validation_error};

/// JSON body deserialized and checked with `validator`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        value.validate().map_err(validation_error)?;
        Ok(Self(value))
    }
}

/// Query string deserialized and checked with `validator`.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(query_rejection)?;

        value.validate().map_err(validation_error)?;
        Ok(Self(value))
    }
}

/// Numeric contact id taken from the `{contact_id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactId(pub i64);

impl<S> FromRequestParts<S> for ContactId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        raw.parse()
            .map(Self)
            .map_err(|_| AppError::invalid_field("contact_id", "Contact ID must be an integer"))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            let field = field_from_serde_message(&message)
                .unwrap_or("body")
                .to_string();
            AppError::invalid_field(field, message)
        }
        other => AppError::BadRequest(other.body_text()),
    }
}

fn query_rejection(rejection: QueryRejection) -> AppError {
    let message = rejection.body_text();
    let field = field_from_serde_message(&message)
        .unwrap_or("query_string")
        .to_string();
    AppError::invalid_field(field, message)
}
