//! # Auth Store
//!
//! Owns the core [`AuthState`] and the persisted session token.
//!
//! Only the token is persisted (key `"token"`, a bare JSON string); the user
//! record lives for the session. A token found at startup is restored into
//! the state but does not authenticate on its own.

use tracing::warn;

use folio_core::auth::{AuthAction, AuthState};
use folio_core::error::CoreResult;
use folio_core::types::User;
use folio_storage::{keys, LocalStore};

/// The session plus its token persistence.
#[derive(Debug)]
pub struct AuthStore {
    auth: AuthState,
    storage: LocalStore,
}

impl AuthStore {
    /// Creates the store and restores a previously persisted token, if any.
    pub fn hydrate(storage: LocalStore) -> Self {
        let mut auth = AuthState::new();

        match storage.read::<String>(keys::TOKEN) {
            Ok(Some(token)) => {
                if auth.apply(AuthAction::TokenRestored { token }).is_ok() {
                    tracing::debug!("session token restored");
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "failed to load session token, starting signed out");
            }
        }

        AuthStore { auth, storage }
    }

    /// Records a successful login and persists the token.
    pub fn sign_in(&mut self, user: User, token: String) -> CoreResult<()> {
        if let Err(e) = self.storage.write(keys::TOKEN, &token) {
            warn!(error = %e, "failed to persist session token");
        }
        self.auth.apply(AuthAction::LoginSucceeded { user, token })
    }

    /// Signs out and removes the persisted token.
    pub fn sign_out(&mut self) -> CoreResult<()> {
        if let Err(e) = self.storage.remove(keys::TOKEN) {
            warn!(error = %e, "failed to remove session token");
        }
        self.auth.apply(AuthAction::LoggedOut)
    }

    /// Merges profile edits into the signed-in user. Token unchanged.
    pub fn update_profile(
        &mut self,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    ) -> CoreResult<()> {
        self.auth.apply(AuthAction::ProfileUpdated {
            first_name,
            last_name,
            email,
        })
    }

    /// Read access to the session state.
    pub fn state(&self) -> &AuthState {
        &self.auth
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use folio_core::types::UserRole;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            first_name: "Alex".to_string(),
            last_name: "Reader".to_string(),
            email: "alex@example.com".to_string(),
            role: UserRole::User,
            is_premium: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_sign_in_persists_token_for_next_session() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = LocalStore::open(dir.path()).expect("open");

        {
            let mut store = AuthStore::hydrate(storage.clone());
            store.sign_in(user(), "tok-abc".to_string()).unwrap();
            assert!(store.state().is_authenticated());
        }

        // the token survives, but on its own it does not authenticate
        let store = AuthStore::hydrate(storage);
        assert_eq!(store.state().token(), Some("tok-abc"));
        assert!(!store.state().is_authenticated());
    }

    #[test]
    fn test_sign_out_removes_persisted_token() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = LocalStore::open(dir.path()).expect("open");

        let mut store = AuthStore::hydrate(storage.clone());
        store.sign_in(user(), "tok-abc".to_string()).unwrap();
        store.sign_out().unwrap();
        assert!(!store.state().is_authenticated());

        let stored: Option<String> = storage.read(keys::TOKEN).unwrap();
        assert!(stored.is_none());
    }

    #[test]
    fn test_corrupted_token_hydrates_signed_out() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("token.json"), "not-a-json-string").unwrap();
        let storage = LocalStore::open(dir.path()).expect("open");

        let store = AuthStore::hydrate(storage);
        assert!(store.state().token().is_none());
        assert!(!store.state().is_authenticated());
    }
}
