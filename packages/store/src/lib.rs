pub mod forms;
pub mod models;
pub mod repo;
pub mod slug;

mod memory;
pub use memory::MemoryStore;

pub use forms::{FormErrors, NoteForm, WARNING};
pub use models::{NewNote, Note, NoteFields};
pub use repo::{NoteRepository, NoteStore, SaveError, StoreError};
pub use slug::slugify;
