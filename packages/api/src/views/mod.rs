//! Request handlers. Each handler loads what it needs, delegates the rules to
//! [`store::NoteRepository`] or the auth forms and answers with a
//! [`crate::pages::Page`] or a redirect.

pub mod notes;
pub mod users;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// `302 Found` pointing at `location`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Anything the router does not know.
pub async fn fallback() -> AppError {
    AppError::NotFound
}
