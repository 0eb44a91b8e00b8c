//! # Database module: SQLite pool, migrations and the note store
//!
//! - [`connect`]: opens a pool from [`crate::settings::Database`]. In-memory
//!   databases keep one connection open for the lifetime of the pool.
//! - [`migrate`]: applies `migrations/*.sql` (users, then notes).
//! - [`SqlNoteStore`]: the [`store::NoteStore`] used by the server.

mod notes;
mod pool;

pub use notes::SqlNoteStore;
pub use pool::{connect, migrate};
