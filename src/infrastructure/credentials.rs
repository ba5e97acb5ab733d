// src/infrastructure/credentials.rs
use crate::application::CredentialStore;
use crate::constants::TOKEN_FILE_NAME;
use crate::domain::DomainError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persists the bearer credential as a single file in the app directory.
/// Read once at startup; written on login/signup, removed on logout.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new<P: AsRef<Path>>(app_dir: P) -> Self {
        let path = app_dir.as_ref().join(TOKEN_FILE_NAME);
        debug!(?path, "Creating new FileCredentialStore");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<String>, DomainError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                Ok((!token.is_empty()).then_some(token))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::CredentialStore(e.to_string())),
        }
    }

    fn save(&self, token: &str) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| DomainError::CredentialStore(e.to_string()))?;
        }
        fs::write(&self.path, token).map_err(|e| DomainError::CredentialStore(e.to_string()))?;

        // The token proves identity; keep it owner-readable only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(|e| DomainError::CredentialStore(e.to_string()))?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), DomainError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::CredentialStore(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_no_token_file_when_loading_then_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path());

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn given_saved_token_when_loading_then_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path());

        store.save("tok-1").unwrap();

        assert_eq!(store.load().unwrap(), Some("tok-1".to_string()));
    }

    #[test]
    fn given_token_file_with_trailing_newline_when_loading_then_token_is_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path());
        fs::write(store.path(), "tok-1\n").unwrap();

        assert_eq!(store.load().unwrap(), Some("tok-1".to_string()));
    }

    #[test]
    fn given_cleared_store_when_clearing_again_then_still_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path());
        store.save("tok-1").unwrap();

        store.clear().unwrap();
        store.clear().unwrap();

        assert_eq!(store.load().unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn given_saved_token_when_inspecting_file_then_only_owner_can_read() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path());
        store.save("tok-1").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
