//! # API crate: the Notes web server
//!
//! Server-rendered note keeping: users sign up, log in and manage private
//! notes addressed by a unique slug.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2 password hashing, session login state, `CurrentUser`/`MaybeUser` extractors, login and signup forms |
//! | [`db`] | SQLite pool, migrations and the SQL-backed [`store::NoteStore`] |
//! | [`models`] | Database models (`User`) and their render-safe projection (`UserInfo`) |
//! | [`pages`] | HTML pages rendered with `dioxus-ssr`, carrying their context |
//! | [`settings`] | Layered configuration (defaults, `notes.toml`, `NOTES_*` env) |
//! | [`urls`] | Route names, paths and the login redirect |
//! | [`views`] | Request handlers |
//!
//! ## Routes
//!
//! | Name | Path | Access |
//! |------|------|--------|
//! | `notes:home` | `/` | everybody |
//! | `notes:add` | `/add/` | logged in |
//! | `notes:edit` | `/edit/{slug}/` | author |
//! | `notes:detail` | `/note/{slug}/` | author |
//! | `notes:delete` | `/delete/{slug}/` | author |
//! | `notes:list` | `/notes/` | logged in |
//! | `notes:success` | `/done/` | logged in |
//! | `users:login` / `users:logout` / `users:signup` | `/auth/.../` | everybody |
//!
//! Anonymous requests to protected pages are redirected to the login page;
//! other users' notes answer 404.

use axum::routing::get;
use axum::Router;
use tower_sessions::cookie::time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

pub mod auth;
pub mod db;
mod error;
pub mod models;
pub mod pages;
pub mod settings;
mod state;
pub mod urls;
pub mod views;

pub use error::AppError;
pub use models::{User, UserInfo};
pub use settings::Settings;
pub use state::AppState;

/// All routes, without the session layer.
pub fn router(state: AppState) -> Router {
    use views::{notes, users};

    Router::new()
        .route(urls::HOME, get(notes::home))
        .route(urls::ADD, get(notes::add_form).post(notes::add))
        .route(urls::EDIT_ROUTE, get(notes::edit_form).post(notes::edit))
        .route(urls::DETAIL_ROUTE, get(notes::detail))
        .route(
            urls::DELETE_ROUTE,
            get(notes::delete_form)
                .post(notes::delete)
                .delete(notes::delete),
        )
        .route(urls::LIST, get(notes::list))
        .route(urls::SUCCESS, get(notes::success))
        .route(urls::LOGIN, get(users::login_form).post(users::login))
        .route(urls::LOGOUT, get(users::logout).post(users::logout))
        .route(urls::SIGNUP, get(users::signup_form).post(users::signup))
        .fallback(views::fallback)
        .with_state(state)
}

/// The complete application: routes plus sessions stored next to the data.
pub async fn app(state: AppState) -> Result<Router, AppError> {
    let session_store = SqliteStore::new(state.pool.clone());
    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(state.settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            state.settings.session.days,
        )));

    Ok(router(state).layer(session_layer))
}

/// Connect to the configured database, migrate it and build the application.
pub async fn setup(settings: Settings) -> Result<(Router, AppState), AppError> {
    let pool = db::connect(&settings.database).await?;
    db::migrate(&pool).await?;
    let state = AppState::new(pool, settings);
    let router = app(state.clone()).await?;
    Ok((router, state))
}
