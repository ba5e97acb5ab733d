// src/application/mod.rs
pub mod category_creator;
pub mod forms;
pub mod note_browser;
pub mod note_deleter;
pub mod note_saver;
pub mod session;

pub use category_creator::CategoryCreator;
pub use note_browser::{LoadState, NoteBrowser, NotesApi};
pub use note_deleter::NoteDeleter;
pub use note_saver::NoteSaver;
pub use session::{AuthApi, CredentialStore, SessionService};
