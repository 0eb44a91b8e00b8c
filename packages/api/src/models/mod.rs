//! Data models for the application.

mod user;

pub use store::Note;
pub use user::{User, UserInfo};
