// src/application/note_browser.rs
use crate::domain::{DomainError, Filter, Note, Session};
use tracing::{debug, warn};

/// Note surface of the remote service. Every call attaches the current
/// bearer credential when one exists; the server rejects unauthenticated
/// requests on its own.
#[allow(async_fn_in_trait)]
pub trait NotesApi {
    async fn list_notes(&self, filter: &Filter) -> Result<Vec<Note>, DomainError>;
    async fn create_note(&self, note: &Note) -> Result<Note, DomainError>;
    async fn update_note(&self, note: &Note) -> Result<Note, DomainError>;
    async fn delete_note(&self, id: i64) -> Result<(), DomainError>;
    async fn list_categories(&self) -> Result<Vec<String>, DomainError>;
    async fn create_category(&self, name: &str) -> Result<(), DomainError>;
    async fn list_tags(&self) -> Result<Vec<String>, DomainError>;
}

/// Lifecycle of the visible note list. `Failed` keeps "server down"
/// distinguishable from "no notes found".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed {
        reason: String,
    },
}

/// View model keeping the visible note list consistent with the remote
/// store. Changing a filter field is the sole trigger of a refresh; a
/// request-generation counter makes sure a superseded response can never
/// overwrite newer state.
pub struct NoteBrowser<A: NotesApi> {
    api: A,
    session: Session,
    filter: Filter,
    state: LoadState,
    notes: Vec<Note>,
    categories: Vec<String>,
    server_tags: Vec<String>,
    visible_tags: Vec<String>,
    generation: u64,
}

impl<A: NotesApi> NoteBrowser<A> {
    pub fn new(api: A, session: Session) -> Self {
        Self {
            api,
            session,
            filter: Filter::default(),
            state: LoadState::Idle,
            notes: vec![],
            categories: vec![],
            server_tags: vec![],
            visible_tags: vec![],
            generation: 0,
        }
    }

    pub async fn set_category(&mut self, category: Option<String>) {
        self.filter.category = category;
        self.refresh().await;
    }

    pub async fn set_tag(&mut self, tag: Option<String>) {
        self.filter.tag = tag;
        self.refresh().await;
    }

    pub async fn set_search(&mut self, search: String) {
        self.filter.search = search;
        self.refresh().await;
    }

    /// Issue a list request for the current filter. Does nothing while the
    /// session is unauthenticated.
    pub async fn refresh(&mut self) {
        if !self.session.is_authenticated() {
            debug!("Skipping refresh, session not authenticated");
            return;
        }
        let generation = self.begin_load();
        let filter = self.filter.clone();
        let result = self.api.list_notes(&filter).await;
        self.finish_load(generation, result);
    }

    /// Start a load and return its generation. Split from [`finish_load`]
    /// so out-of-order completions can be exercised directly.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.generation
    }

    /// Apply a completed load. A response whose generation is no longer
    /// current is discarded.
    pub fn finish_load(&mut self, generation: u64, result: Result<Vec<Note>, DomainError>) {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "Discarding stale list response"
            );
            return;
        }
        match result {
            Ok(notes) => {
                debug!(count = notes.len(), "Note list loaded");
                self.notes = notes;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                warn!(error = %e, "Note list request failed");
                self.notes.clear();
                self.state = LoadState::Failed {
                    reason: e.to_string(),
                };
            }
        }
        self.recompute_visible_tags();
    }

    /// Prefetch categories and tags after session establishment. Failures
    /// degrade to empty enumerations; the note list is unaffected.
    pub async fn prime(&mut self) {
        if !self.session.is_authenticated() {
            return;
        }
        match self.api.list_categories().await {
            Ok(categories) => self.categories = categories,
            Err(e) => warn!(error = %e, "Category prefetch failed"),
        }
        match self.api.list_tags().await {
            Ok(tags) => {
                self.server_tags = tags;
                self.recompute_visible_tags();
            }
            Err(e) => warn!(error = %e, "Tag prefetch failed"),
        }
    }

    /// Replace the session. Moving to an unauthenticated session is the one
    /// thing that clears the visible list and resets the filter.
    pub fn set_session(&mut self, session: Session) {
        let authenticated = session.is_authenticated();
        self.session = session;
        if !authenticated {
            self.filter = Filter::default();
            self.state = LoadState::Idle;
            self.notes.clear();
            self.categories.clear();
            self.server_tags.clear();
            self.visible_tags.clear();
        }
    }

    /// Union of the tags on loaded notes and the server enumeration,
    /// deduplicated. Recomputed when the data changes, not per render.
    fn recompute_visible_tags(&mut self) {
        let mut tags: Vec<String> = Vec::new();
        for tag in self
            .notes
            .iter()
            .flat_map(|n| n.tags.iter())
            .chain(self.server_tags.iter())
        {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
        self.visible_tags = tags;
    }

    /// Locate a note in the currently visible list.
    pub fn find_note(&self, id: i64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == Some(id))
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn visible_tags(&self) -> &[String] {
        &self.visible_tags
    }
}
