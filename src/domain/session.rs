// src/domain/session.rs
use serde::{Deserialize, Serialize};

/// The identity the server reports for a bearer credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
}

/// Authentication state of the client.
///
/// A credential is `Pending` from the moment the server hands it out until
/// an identity lookup confirms it. Only `Confirmed` counts as authenticated;
/// a rejected credential never shows authenticated state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Pending {
        email: String,
    },
    Confirmed {
        identity: Identity,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Confirmed { .. })
    }

    /// Email associated with the session, confirmed or not.
    pub fn email(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Pending { email } => Some(email),
            Session::Confirmed { identity } => Some(&identity.email),
        }
    }
}
