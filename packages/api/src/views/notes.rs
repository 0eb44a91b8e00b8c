//! Note pages. Everything except the home page requires a login, and a note
//! is only ever looked up among the current user's own notes: somebody
//! else's note answers 404 exactly like a missing one.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Form;
use store::{Note, NoteFields, NoteForm, SaveError};

use super::found;
use crate::auth::{CurrentUser, MaybeUser};
use crate::error::AppError;
use crate::models::User;
use crate::pages::{self, Page};
use crate::state::AppState;
use crate::urls;

async fn own_note(state: &AppState, user: &User, slug: &str) -> Result<Note, AppError> {
    state
        .notes
        .get(user.id, slug)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn home(MaybeUser(user): MaybeUser) -> Page {
    let info = user.map(|u| u.to_info());
    pages::notes::home(info.as_ref())
}

pub async fn add_form(CurrentUser(user): CurrentUser) -> Page {
    pages::notes::form(Some(&user.to_info()), &NoteForm::unbound(), false)
}

pub async fn add(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(data): Form<NoteFields>,
) -> Result<Response, AppError> {
    let form = NoteForm::unbound().bind(data);
    match state.notes.create(user.id, form).await {
        Ok(note) => {
            tracing::info!(slug = %note.slug, author = %user.username, "note created");
            Ok(found(urls::SUCCESS))
        }
        Err(SaveError::Invalid(form)) => {
            Ok(pages::notes::form(Some(&user.to_info()), &form, false).into_response())
        }
        Err(SaveError::Store(err)) => Err(err.into()),
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Page, AppError> {
    let note = own_note(&state, &user, &slug).await?;
    Ok(pages::notes::form(
        Some(&user.to_info()),
        &NoteForm::for_note(&note),
        true,
    ))
}

pub async fn edit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
    Form(data): Form<NoteFields>,
) -> Result<Response, AppError> {
    let note = own_note(&state, &user, &slug).await?;
    let form = NoteForm::for_note(&note).bind(data);
    match state.notes.update(&note, form).await {
        Ok(updated) => {
            tracing::info!(from = %note.slug, to = %updated.slug, "note updated");
            Ok(found(urls::SUCCESS))
        }
        Err(SaveError::Invalid(form)) => {
            Ok(pages::notes::form(Some(&user.to_info()), &form, true).into_response())
        }
        Err(SaveError::Store(err)) => Err(err.into()),
    }
}

pub async fn detail(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Page, AppError> {
    let note = own_note(&state, &user, &slug).await?;
    Ok(pages::notes::detail(Some(&user.to_info()), &note))
}

pub async fn delete_form(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Page, AppError> {
    let note = own_note(&state, &user, &slug).await?;
    Ok(pages::notes::delete(Some(&user.to_info()), &note))
}

/// Handles both the confirmation form's POST and a plain DELETE.
pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let note = own_note(&state, &user, &slug).await?;
    if !state.notes.delete(&note).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(slug = %note.slug, "note deleted");
    Ok(found(urls::SUCCESS))
}

pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Page, AppError> {
    let notes = state.notes.list(user.id).await?;
    Ok(pages::notes::list(Some(&user.to_info()), notes))
}

pub async fn success(CurrentUser(user): CurrentUser) -> Page {
    pages::notes::success(Some(&user.to_info()))
}
