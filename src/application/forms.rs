// src/application/forms.rs
//
// Form controllers backing the interactive dialogs: collect input, run the
// presence checks, call the matching use case on confirm. A failed submit
// records the error and leaves the form open; a successful one closes it by
// returning the outcome.

use crate::application::{
    AuthApi, CategoryCreator, CredentialStore, NoteSaver, NotesApi, SessionService,
};
use crate::domain::{Note, Session};
use crate::util::text::split_tags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// Login/signup form. Email and password are required; everything else is
/// the server's problem.
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
}

impl AuthForm {
    pub fn new(mode: AuthMode, email: String, password: String) -> Self {
        Self {
            mode,
            email,
            password,
            error: None,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() {
            return Err("Email is required".to_string());
        }
        if self.password.is_empty() {
            return Err("Password is required".to_string());
        }
        Ok(())
    }

    /// Returns the established session on success; on failure records an
    /// error message and returns `None` so the form stays open.
    pub async fn submit<A: AuthApi, S: CredentialStore>(
        &mut self,
        sessions: &mut SessionService<A, S>,
    ) -> Option<Session> {
        if let Err(message) = self.validate() {
            self.error = Some(message);
            return None;
        }
        let result = match self.mode {
            AuthMode::Login => sessions.login(&self.email, &self.password).await,
            AuthMode::Signup => sessions.signup(&self.email, &self.password).await,
        };
        match result {
            Ok(session) => {
                self.error = None;
                Some(session)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

/// Note create/edit form. No validation on title or content; tags are a
/// comma-separated string parsed on submit.
pub struct NoteForm {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags_input: String,
    pub error: Option<String>,
}

impl NoteForm {
    pub fn blank() -> Self {
        Self {
            id: None,
            title: String::new(),
            content: String::new(),
            category: String::new(),
            tags_input: String::new(),
            error: None,
        }
    }

    /// Seed the form from an existing note, the way the edit dialog does.
    pub fn editing(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
            category: note.category.clone().unwrap_or_default(),
            tags_input: note.tags.join(", "),
            error: None,
        }
    }

    /// The note this form currently describes. An empty category means none.
    pub fn to_note(&self) -> Note {
        Note {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            category: Some(self.category.clone()).filter(|c| !c.is_empty()),
            tags: split_tags(&self.tags_input),
        }
    }

    /// Returns the saved note on success; on failure records an error and
    /// returns `None` so the form stays open.
    pub async fn submit<A: NotesApi>(&mut self, saver: &NoteSaver<A>) -> Option<Note> {
        match saver.save(&self.to_note()).await {
            Ok(note) => {
                self.error = None;
                Some(note)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

/// Outcome of a category form submit.
#[derive(Debug, PartialEq, Eq)]
pub enum CategorySubmit {
    Created,
    /// Blank name; nothing was sent to the server.
    Ignored,
}

pub struct CategoryForm {
    pub name: String,
    pub error: Option<String>,
}

impl CategoryForm {
    pub fn new(name: String) -> Self {
        Self { name, error: None }
    }

    pub async fn submit<A: NotesApi>(
        &mut self,
        creator: &CategoryCreator<A>,
    ) -> Option<CategorySubmit> {
        let name = self.name.trim();
        if name.is_empty() {
            return Some(CategorySubmit::Ignored);
        }
        match creator.create(name).await {
            Ok(()) => {
                self.error = None;
                Some(CategorySubmit::Created)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{MockCredentialStore, MockNotesApi};

    #[tokio::test]
    async fn given_blank_category_name_when_submitting_then_no_request_is_issued() {
        // Arrange
        let api = MockNotesApi::builder().build();
        let creator = CategoryCreator::new(api.clone());
        let mut form = CategoryForm::new("   ".to_string());

        // Act
        let outcome = form.submit(&creator).await;

        // Assert
        assert_eq!(outcome, Some(CategorySubmit::Ignored));
        assert_eq!(api.create_category_calls(), 0);
    }

    #[tokio::test]
    async fn given_surrounding_whitespace_when_submitting_category_then_name_is_trimmed() {
        // Arrange
        let api = MockNotesApi::builder().build();
        let creator = CategoryCreator::new(api.clone());
        let mut form = CategoryForm::new("  Work  ".to_string());

        // Act
        let outcome = form.submit(&creator).await;

        // Assert
        assert_eq!(outcome, Some(CategorySubmit::Created));
        assert_eq!(api.categories(), vec!["Work".to_string()]);
    }

    #[tokio::test]
    async fn given_missing_password_when_submitting_auth_form_then_error_without_request() {
        // Arrange
        let api = MockNotesApi::builder().build();
        let mut sessions = SessionService::new(api.clone(), MockCredentialStore::empty());
        let mut form = AuthForm::new(AuthMode::Login, "a@b.c".to_string(), String::new());

        // Act
        let outcome = form.submit(&mut sessions).await;

        // Assert
        assert!(outcome.is_none());
        assert_eq!(form.error.as_deref(), Some("Password is required"));
        assert_eq!(api.auth_attempts(), 0);
    }

    #[tokio::test]
    async fn given_rejected_credentials_when_submitting_auth_form_then_form_stays_open_with_error()
    {
        // Arrange
        let api = MockNotesApi::builder()
            .with_account("a@b.c", "secret", "tok-1")
            .build();
        let mut sessions = SessionService::new(api, MockCredentialStore::empty());
        let mut form = AuthForm::new(AuthMode::Login, "a@b.c".to_string(), "wrong".to_string());

        // Act
        let outcome = form.submit(&mut sessions).await;

        // Assert
        assert!(outcome.is_none());
        assert!(form.error.is_some());
    }

    #[tokio::test]
    async fn given_comma_separated_tags_when_building_note_then_tags_are_parsed() {
        // Arrange
        let mut form = NoteForm::blank();
        form.tags_input = "work,  todo , ,urgent".to_string();

        // Act
        let note = form.to_note();

        // Assert
        assert_eq!(note.tags, vec!["work", "todo", "urgent"]);
        assert_eq!(note.category, None);
    }

    #[tokio::test]
    async fn given_existing_note_when_seeding_edit_form_then_fields_round_trip() {
        // Arrange
        let note = Note {
            id: Some(3),
            title: "T".to_string(),
            content: "C".to_string(),
            category: Some("Work".to_string()),
            tags: vec!["a".to_string(), "b".to_string()],
        };

        // Act
        let form = NoteForm::editing(&note);

        // Assert
        assert_eq!(form.tags_input, "a, b");
        assert_eq!(form.to_note(), note);
    }
}
