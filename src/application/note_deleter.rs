// src/application/note_deleter.rs
use crate::application::NotesApi;
use crate::domain::DomainError;

pub struct NoteDeleter<A: NotesApi> {
    api: A,
}

impl<A: NotesApi> NoteDeleter<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Delete a note by id. Confirmation is the caller's responsibility;
    /// this issues the request unconditionally.
    pub async fn delete(&self, note_id: i64) -> Result<(), DomainError> {
        self.api.delete_note(note_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;
    use crate::util::testing::MockNotesApi;

    #[tokio::test]
    async fn given_existing_note_when_deleting_then_note_is_removed() {
        // Arrange
        let api = MockNotesApi::builder()
            .with_note(Note {
                id: Some(7),
                title: "gone soon".to_string(),
                content: String::new(),
                category: None,
                tags: vec![],
            })
            .build();
        let deleter = NoteDeleter::new(api.clone());

        // Act
        let result = deleter.delete(7).await;

        // Assert
        assert!(result.is_ok());
        assert!(api.notes().is_empty());
    }

    #[tokio::test]
    async fn given_nonexistent_note_when_deleting_then_returns_error() {
        // Arrange
        let api = MockNotesApi::builder().build();
        let deleter = NoteDeleter::new(api);

        // Act
        let result = deleter.delete(999).await;

        // Assert
        assert!(matches!(result, Err(DomainError::NoteNotFound(999))));
    }
}
