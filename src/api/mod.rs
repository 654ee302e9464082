//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that runs schema validation before the handler.
///
/// A malformed body or a schema violation becomes an `AppError::Validation`
/// carrying the field-level failures, so it reaches the central error
/// handler like any other request error.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation {
                message: format!("Invalid request body: {}", rejection.body_text()),
                details: None,
            })?;
        payload.validate()?;
        Ok(ValidatedJson(payload))
    }
}

/// Path extractor for the `:id` segment, accepting only syntactically
/// valid UUIDs
pub struct BookId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::invalid_field("id", "Invalid book ID"))?;
        let id = Uuid::parse_str(&raw)
            .map_err(|_| AppError::invalid_field("id", "Invalid book ID"))?;
        Ok(BookId(id))
    }
}
