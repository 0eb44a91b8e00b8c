//! Session-backed authentication.
//!
//! The session stores the logged-in user's id under [`SESSION_USER_ID_KEY`].
//! Handlers ask for the user through an extractor: [`CurrentUser`] for pages
//! that require a login, [`MaybeUser`] for pages open to everybody.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use tower_sessions::Session;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::User;
use crate::state::AppState;
use crate::{urls, views};

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// The logged-in user. Anonymous requests are redirected to the login page
/// with `next` set to the requested path.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// The logged-in user, if any.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<User>);

async fn session_user(session: &Session, state: &AppState) -> Result<Option<User>, AppError> {
    let user_id: Option<String> = session.get(SESSION_USER_ID_KEY).await?;
    let Some(user_id) = user_id else {
        return Ok(None);
    };
    let Ok(user_uuid) = Uuid::parse_str(&user_id) else {
        tracing::warn!(%user_id, "session holds a malformed user id");
        return Ok(None);
    };
    Ok(User::read(user_uuid, &state.pool).await?)
}

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;
        let user = session_user(&session, state)
            .await
            .map_err(IntoResponse::into_response)?;
        Ok(MaybeUser(user))
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let MaybeUser(user) = MaybeUser::from_request_parts(parts, state).await?;
        match user {
            Some(user) => Ok(CurrentUser(user)),
            None => {
                let next = parts
                    .uri
                    .path_and_query()
                    .map_or_else(|| parts.uri.path(), |pq| pq.as_str());
                Err(views::found(&urls::login_redirect(next)))
            }
        }
    }
}

/// Attach `user` to the session under a fresh session id.
pub async fn login(session: &Session, user: &User) -> Result<(), AppError> {
    session.cycle_id().await?;
    session
        .insert(SESSION_USER_ID_KEY, user.id.to_string())
        .await?;
    tracing::info!(user = %user.username, "user logged in");
    Ok(())
}

/// Forget the session entirely.
pub async fn logout(session: &Session) -> Result<(), AppError> {
    session.flush().await?;
    Ok(())
}
