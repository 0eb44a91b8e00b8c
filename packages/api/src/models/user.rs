//! # User model for authenticated users
//!
//! [`User`] is the complete row of the `users` table, loaded with
//! [`sqlx::FromRow`]. [`UserInfo`] is what pages get to see: no password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Convert to UserInfo for rendering.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username.clone(),
        }
    }

    pub async fn read(id: Uuid, pool: &SqlitePool) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_username(
        username: &str,
        pool: &SqlitePool,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new user with an already hashed password.
    pub async fn create(
        username: &str,
        password_hash: &str,
        pool: &SqlitePool,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO users (id, username, password_hash, created_at) VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
    }
}

/// User information safe to render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
}
