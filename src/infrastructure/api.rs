// src/infrastructure/api.rs
use crate::application::{AuthApi, NotesApi};
use crate::domain::{DomainError, Filter, Identity, Note};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

/// HTTP client for the notes service. Stateless apart from the bearer
/// credential; attaches it to every request when present and otherwise
/// sends unauthenticated, leaving rejection to the server. No call retries.
#[derive(Debug, Clone)]
pub struct NotesApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct TokenBody {
    token: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl NotesApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(%base_url, "Creating new NotesApiClient");
        Self {
            http: Client::new(),
            base_url,
            token: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, DomainError> {
        let response = request
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(DomainError::Unauthorized),
            status => {
                // Error bodies carry {message}; anything else gets a stand-in.
                let message = response
                    .json::<ErrorBody>()
                    .await
                    .map(|body| body.message)
                    .unwrap_or_else(|_| "request failed".to_string());
                Err(DomainError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, DomainError> {
        response
            .json::<T>()
            .await
            .map_err(|e| DomainError::MalformedResponse(e.to_string()))
    }

    async fn request_token(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<String, DomainError> {
        let request = self
            .http
            .post(self.url(path))
            .json(&json!({ "email": email, "password": password }));
        let response = self.send(request).await?;
        Ok(Self::decode::<TokenBody>(response).await?.token)
    }
}

impl NotesApi for NotesApiClient {
    #[instrument(level = "debug", skip(self))]
    async fn list_notes(&self, filter: &Filter) -> Result<Vec<Note>, DomainError> {
        let mut request = self.http.get(self.url("/notes"));
        let pairs = filter.query_pairs();
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }
        let response = self.send(self.authorize(request)).await?;
        Self::decode(response).await
    }

    #[instrument(level = "debug", skip(self, note))]
    async fn create_note(&self, note: &Note) -> Result<Note, DomainError> {
        let request = self.authorize(self.http.post(self.url("/notes")).json(note));
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    #[instrument(level = "debug", skip(self, note))]
    async fn update_note(&self, note: &Note) -> Result<Note, DomainError> {
        // An update without an id cannot address a server note.
        let Some(id) = note.id else {
            return Err(DomainError::NoteNotFound(0));
        };
        let request = self.authorize(self.http.put(self.url(&format!("/notes/{id}"))).json(note));
        match self.send(request).await {
            Ok(response) => Self::decode(response).await,
            Err(DomainError::Api { status: 404, .. }) => Err(DomainError::NoteNotFound(id)),
            Err(e) => Err(e),
        }
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete_note(&self, id: i64) -> Result<(), DomainError> {
        let request = self.authorize(self.http.delete(self.url(&format!("/notes/{id}"))));
        match self.send(request).await {
            Ok(_) => Ok(()),
            Err(DomainError::Api { status: 404, .. }) => Err(DomainError::NoteNotFound(id)),
            Err(e) => Err(e),
        }
    }

    #[instrument(level = "debug", skip(self))]
    async fn list_categories(&self) -> Result<Vec<String>, DomainError> {
        let request = self.authorize(self.http.get(self.url("/notes/categories")));
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn create_category(&self, name: &str) -> Result<(), DomainError> {
        let request = self.authorize(
            self.http
                .post(self.url("/notes/categories"))
                .json(&json!({ "name": name })),
        );
        self.send(request).await?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    async fn list_tags(&self) -> Result<Vec<String>, DomainError> {
        let request = self.authorize(self.http.get(self.url("/notes/tags")));
        let response = self.send(request).await?;
        Self::decode(response).await
    }
}

impl AuthApi for NotesApiClient {
    #[instrument(level = "debug", skip(self))]
    async fn whoami(&self) -> Result<Identity, DomainError> {
        let request = self.authorize(self.http.get(self.url("/auth/whoami")));
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    #[instrument(level = "debug", skip(self, password))]
    async fn login(&self, email: &str, password: &str) -> Result<String, DomainError> {
        self.request_token("/auth/login", email, password).await
    }

    #[instrument(level = "debug", skip(self, password))]
    async fn signup(&self, email: &str, password: &str) -> Result<String, DomainError> {
        self.request_token("/auth/signup", email, password).await
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}
