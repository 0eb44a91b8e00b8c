//! Signup, login and logout.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use tower_sessions::Session;

use super::found;
use crate::auth::{self, LoginFields, LoginForm, SignupFields, SignupForm};
use crate::error::AppError;
use crate::models::User;
use crate::pages::{self, Page};
use crate::state::AppState;
use crate::urls;

#[derive(Debug, Deserialize)]
pub struct NextQuery {
    next: Option<String>,
}

pub async fn login_form(Query(query): Query<NextQuery>) -> Page {
    pages::users::login(&LoginForm::new(query.next))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(fields): Form<LoginFields>,
) -> Result<Response, AppError> {
    let username = match LoginForm::clean(&fields) {
        Ok(username) => username,
        Err(form) => return Ok(pages::users::login(&form).into_response()),
    };

    let user = User::find_by_username(&username, &state.pool).await?;
    let valid = match &user {
        Some(user) => auth::verify_password(&fields.password, &user.password_hash)?,
        None => {
            auth::verify_missing_user(&fields.password);
            false
        }
    };
    let Some(user) = user.filter(|_| valid) else {
        tracing::info!(%username, "failed login attempt");
        return Ok(pages::users::login(&LoginForm::rejected(&fields)).into_response());
    };

    auth::login(&session, &user).await?;
    let next = if urls::is_local(&fields.next) {
        fields.next.as_str()
    } else {
        urls::HOME
    };
    Ok(found(next))
}

pub async fn logout(session: Session) -> Result<Page, AppError> {
    auth::logout(&session).await?;
    Ok(pages::users::logged_out())
}

pub async fn signup_form() -> Page {
    pages::users::signup(&SignupForm::default())
}

pub async fn signup(
    State(state): State<AppState>,
    Form(fields): Form<SignupFields>,
) -> Result<Response, AppError> {
    let (username, password) = match SignupForm::clean(&fields) {
        Ok(cleaned) => cleaned,
        Err(form) => return Ok(pages::users::signup(&form).into_response()),
    };
    let taken = || pages::users::signup(&SignupForm::username_taken(&username)).into_response();

    if User::find_by_username(&username, &state.pool).await?.is_some() {
        return Ok(taken());
    }
    let password_hash = auth::hash_password(&password)?;
    match User::create(&username, &password_hash, &state.pool).await {
        Ok(user) => {
            tracing::info!(user = %user.username, "user signed up");
            Ok(found(urls::LOGIN))
        }
        Err(sqlx::Error::Database(err)) if err.is_unique_violation() => Ok(taken()),
        Err(err) => Err(err.into()),
    }
}
