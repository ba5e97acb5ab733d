// src/util/testing.rs

use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{AuthApi, CredentialStore, NotesApi};
use crate::domain::{DomainError, Filter, Identity, Note};

fn status_error(status: u16) -> DomainError {
    match status {
        401 | 403 => DomainError::Unauthorized,
        _ => DomainError::Api {
            status,
            message: "mock failure".to_string(),
        },
    }
}

#[derive(Default)]
struct MockState {
    notes: Vec<Note>,
    categories: Vec<String>,
    tags: Vec<String>,
    accounts: HashMap<String, (String, String)>,
    identities: HashMap<String, String>,
    token: Option<String>,
    list_failure: Option<u16>,
    mutation_failure: Option<u16>,
    recorded_filters: Vec<Filter>,
    create_category_calls: usize,
    auth_attempts: usize,
}

/// Shared mock for the remote notes service, covering both the auth and the
/// note surface. Clones share state, so the handle given to one use case
/// observes what another wrote — which is exactly what the round-trip tests
/// need.
///
/// # Examples
///
/// ```
/// use notectl::util::testing::MockNotesApi;
/// use notectl::domain::Note;
///
/// let mock = MockNotesApi::builder()
///     .with_account("a@b.c", "secret", "tok-1")
///     .with_note(Note::draft("T".to_string(), "C".to_string()))
///     .build();
/// ```
#[derive(Clone)]
pub struct MockNotesApi {
    state: Arc<Mutex<MockState>>,
}

impl MockNotesApi {
    pub fn builder() -> MockNotesApiBuilder {
        MockNotesApiBuilder::new()
    }

    /// Notes currently held by the mock server, in insertion order.
    pub fn notes(&self) -> Vec<Note> {
        self.state.lock().expect("mock state").notes.clone()
    }

    pub fn categories(&self) -> Vec<String> {
        self.state.lock().expect("mock state").categories.clone()
    }

    /// Every filter a list request was issued for, in order.
    pub fn recorded_filters(&self) -> Vec<Filter> {
        self.state
            .lock()
            .expect("mock state")
            .recorded_filters
            .clone()
    }

    pub fn create_category_calls(&self) -> usize {
        self.state.lock().expect("mock state").create_category_calls
    }

    pub fn auth_attempts(&self) -> usize {
        self.state.lock().expect("mock state").auth_attempts
    }
}

impl NotesApi for MockNotesApi {
    async fn list_notes(&self, filter: &Filter) -> Result<Vec<Note>, DomainError> {
        let mut state = self.state.lock().expect("mock state");
        state.recorded_filters.push(filter.clone());
        if let Some(status) = state.list_failure {
            return Err(status_error(status));
        }
        let search = filter.search.to_lowercase();
        Ok(state
            .notes
            .iter()
            .filter(|n| match filter.category.as_deref() {
                Some(category) => n.category.as_deref() == Some(category),
                None => true,
            })
            .filter(|n| match filter.tag.as_deref() {
                Some(tag) => n.tags.iter().any(|t| t == tag),
                None => true,
            })
            .filter(|n| {
                search.is_empty()
                    || n.title.to_lowercase().contains(&search)
                    || n.content.to_lowercase().contains(&search)
            })
            .cloned()
            .collect())
    }

    async fn create_note(&self, note: &Note) -> Result<Note, DomainError> {
        let mut state = self.state.lock().expect("mock state");
        if let Some(status) = state.mutation_failure {
            return Err(status_error(status));
        }
        let next_id = state
            .notes
            .iter()
            .filter_map(|n| n.id)
            .max()
            .unwrap_or(0)
            + 1;
        let mut saved = note.clone();
        saved.id = Some(next_id);
        state.notes.push(saved.clone());
        Ok(saved)
    }

    async fn update_note(&self, note: &Note) -> Result<Note, DomainError> {
        let mut state = self.state.lock().expect("mock state");
        if let Some(status) = state.mutation_failure {
            return Err(status_error(status));
        }
        let id = note.id.ok_or(DomainError::NoteNotFound(0))?;
        let existing = state
            .notes
            .iter_mut()
            .find(|n| n.id == Some(id))
            .ok_or(DomainError::NoteNotFound(id))?;
        *existing = note.clone();
        Ok(note.clone())
    }

    async fn delete_note(&self, id: i64) -> Result<(), DomainError> {
        let mut state = self.state.lock().expect("mock state");
        if let Some(status) = state.mutation_failure {
            return Err(status_error(status));
        }
        let before = state.notes.len();
        state.notes.retain(|n| n.id != Some(id));
        if state.notes.len() == before {
            return Err(DomainError::NoteNotFound(id));
        }
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<String>, DomainError> {
        let state = self.state.lock().expect("mock state");
        if let Some(status) = state.list_failure {
            return Err(status_error(status));
        }
        Ok(state.categories.clone())
    }

    async fn create_category(&self, name: &str) -> Result<(), DomainError> {
        let mut state = self.state.lock().expect("mock state");
        state.create_category_calls += 1;
        if let Some(status) = state.mutation_failure {
            return Err(status_error(status));
        }
        if !state.categories.iter().any(|c| c == name) {
            state.categories.push(name.to_string());
        }
        Ok(())
    }

    async fn list_tags(&self) -> Result<Vec<String>, DomainError> {
        let state = self.state.lock().expect("mock state");
        if let Some(status) = state.list_failure {
            return Err(status_error(status));
        }
        Ok(state.tags.clone())
    }
}

impl AuthApi for MockNotesApi {
    async fn whoami(&self) -> Result<Identity, DomainError> {
        let state = self.state.lock().expect("mock state");
        let token = state.token.as_ref().ok_or(DomainError::Unauthorized)?;
        state
            .identities
            .get(token)
            .map(|email| Identity {
                email: email.clone(),
            })
            .ok_or(DomainError::Unauthorized)
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, DomainError> {
        let mut state = self.state.lock().expect("mock state");
        state.auth_attempts += 1;
        match state.accounts.get(email) {
            Some((stored_password, token)) if stored_password == password => Ok(token.clone()),
            _ => Err(DomainError::Api {
                status: 401,
                message: "Invalid credentials".to_string(),
            }),
        }
    }

    async fn signup(&self, email: &str, password: &str) -> Result<String, DomainError> {
        let mut state = self.state.lock().expect("mock state");
        state.auth_attempts += 1;
        if state.accounts.contains_key(email) {
            return Err(DomainError::Api {
                status: 409,
                message: "Account already exists".to_string(),
            });
        }
        let token = format!("tok-{email}");
        state
            .accounts
            .insert(email.to_string(), (password.to_string(), token.clone()));
        state.identities.insert(token.clone(), email.to_string());
        Ok(token)
    }

    fn set_token(&mut self, token: Option<String>) {
        self.state.lock().expect("mock state").token = token;
    }
}

/// Builder for [`MockNotesApi`].
pub struct MockNotesApiBuilder {
    state: MockState,
}

impl MockNotesApiBuilder {
    pub fn new() -> Self {
        Self {
            state: MockState::default(),
        }
    }

    /// Seed a note. Notes without an id get one assigned, like the server.
    pub fn with_note(mut self, mut note: Note) -> Self {
        if note.id.is_none() {
            let next_id = self
                .state
                .notes
                .iter()
                .filter_map(|n| n.id)
                .max()
                .unwrap_or(0)
                + 1;
            note.id = Some(next_id);
        }
        self.state.notes.push(note);
        self
    }

    pub fn with_categories(mut self, categories: &[&str]) -> Self {
        self.state.categories = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.state.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Register an account whose credentials exchange for `token`, and whose
    /// token the identity endpoint recognizes.
    pub fn with_account(mut self, email: &str, password: &str, token: &str) -> Self {
        self.state
            .accounts
            .insert(email.to_string(), (password.to_string(), token.to_string()));
        self.state
            .identities
            .insert(token.to_string(), email.to_string());
        self
    }

    /// Make every list operation fail with the given HTTP status.
    pub fn with_list_failure(mut self, status: u16) -> Self {
        self.state.list_failure = Some(status);
        self
    }

    /// Make every mutating operation fail with the given HTTP status.
    pub fn with_mutation_failure(mut self, status: u16) -> Self {
        self.state.mutation_failure = Some(status);
        self
    }

    pub fn build(self) -> MockNotesApi {
        MockNotesApi {
            state: Arc::new(Mutex::new(self.state)),
        }
    }
}

impl Default for MockNotesApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory credential store. Clones share the stored value.
#[derive(Clone)]
pub struct MockCredentialStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MockCredentialStore {
    pub fn empty() -> Self {
        Self {
            token: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.to_string()))),
        }
    }

    pub fn stored(&self) -> Option<String> {
        self.token.lock().expect("store state").clone()
    }
}

impl CredentialStore for MockCredentialStore {
    fn load(&self) -> Result<Option<String>, DomainError> {
        Ok(self.stored())
    }

    fn save(&self, token: &str) -> Result<(), DomainError> {
        *self.token.lock().expect("store state") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), DomainError> {
        *self.token.lock().expect("store state") = None;
        Ok(())
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
