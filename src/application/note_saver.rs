// src/application/note_saver.rs
use crate::application::NotesApi;
use crate::domain::{DomainError, Note};

pub struct NoteSaver<A: NotesApi> {
    api: A,
}

impl<A: NotesApi> NoteSaver<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Save a note: no id means create, an id means update. Returns the
    /// server's version of the note (with its assigned id).
    pub async fn save(&self, note: &Note) -> Result<Note, DomainError> {
        match note.id {
            None => self.api.create_note(note).await,
            Some(_) => self.api.update_note(note).await,
        }
    }
}
