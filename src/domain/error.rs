// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Not authorized (is the session still valid?)")]
    Unauthorized,
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Credential store error: {0}")]
    CredentialStore(String),
}
