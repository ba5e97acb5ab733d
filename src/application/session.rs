// src/application/session.rs
use crate::domain::{DomainError, Identity, Session};
use tracing::{debug, info};

/// Auth surface of the remote service. The implementation holds the current
/// bearer credential and attaches it to every request that has one.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn whoami(&self) -> Result<Identity, DomainError>;

    /// Exchange credentials for a bearer token. No auth header is sent.
    async fn login(&self, email: &str, password: &str) -> Result<String, DomainError>;
    async fn signup(&self, email: &str, password: &str) -> Result<String, DomainError>;

    /// Replace the bearer credential used by subsequent calls.
    fn set_token(&mut self, token: Option<String>);
}

/// Durable storage for the bearer credential. Read once at startup, written
/// and cleared only here.
pub trait CredentialStore {
    fn load(&self) -> Result<Option<String>, DomainError>;
    fn save(&self, token: &str) -> Result<(), DomainError>;

    /// Must succeed when no credential is stored.
    fn clear(&self) -> Result<(), DomainError>;
}

pub struct SessionService<A: AuthApi, S: CredentialStore> {
    api: A,
    store: S,
    session: Session,
}

impl<A: AuthApi, S: CredentialStore> SessionService<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            session: Session::Anonymous,
        }
    }

    /// Restore a persisted credential, validating it against the identity
    /// endpoint. Absence or rejection leaves the session anonymous without
    /// surfacing an error.
    pub async fn restore(&mut self) -> Session {
        let token = match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                debug!(error = %e, "Credential store unreadable, starting anonymous");
                None
            }
        };

        let Some(token) = token else {
            self.session = Session::Anonymous;
            return self.session.clone();
        };

        self.api.set_token(Some(token));
        match self.api.whoami().await {
            Ok(identity) => {
                info!(email = %identity.email, "Session restored");
                self.session = Session::Confirmed { identity };
            }
            Err(e) => {
                debug!(error = %e, "Persisted credential rejected");
                self.api.set_token(None);
                self.session = Session::Anonymous;
            }
        }
        self.session.clone()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<Session, DomainError> {
        // A failed attempt must not disturb an existing session.
        let token = self.api.login(email, password).await?;
        self.establish(email, token).await
    }

    pub async fn signup(&mut self, email: &str, password: &str) -> Result<Session, DomainError> {
        let token = self.api.signup(email, password).await?;
        self.establish(email, token).await
    }

    /// Persist a freshly issued credential and promote the session. The
    /// session is only `Pending` until the identity lookup confirms the
    /// credential actually works.
    async fn establish(&mut self, email: &str, token: String) -> Result<Session, DomainError> {
        self.store.save(&token)?;
        self.api.set_token(Some(token));
        self.session = Session::Pending {
            email: email.to_string(),
        };

        match self.api.whoami().await {
            Ok(identity) => {
                info!(email = %identity.email, "Session confirmed");
                self.session = Session::Confirmed { identity };
            }
            Err(e) => {
                debug!(error = %e, "Identity lookup failed, session stays pending");
            }
        }
        Ok(self.session.clone())
    }

    /// Clear the session and the persisted credential. No server call;
    /// calling this twice is a no-op the second time.
    pub fn logout(&mut self) -> Result<(), DomainError> {
        self.session = Session::Anonymous;
        self.api.set_token(None);
        self.store.clear()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The API handle carrying the session's bearer credential, for wiring
    /// into downstream use cases.
    pub fn api(&self) -> &A {
        &self.api
    }
}
