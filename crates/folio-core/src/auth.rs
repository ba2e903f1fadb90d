//! # Session State
//!
//! Authentication session state and its action reducer.
//!
//! The storefront treats authentication as an external capability: something
//! produces a `User` and a session token, and this module only tracks what
//! the UI needs to know (who is signed in, which token to persist).
//!
//! ## Restored Tokens
//! On startup a previously persisted token is restored into the state, but
//! restoration alone does not authenticate: `is_authenticated()` is true
//! only once a login has produced a user. Inherited behavior; a real backend
//! would verify the token instead.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::types::User;

// =============================================================================
// Auth Action
// =============================================================================

/// A session mutation request.
#[derive(Debug, Clone)]
pub enum AuthAction {
    /// A login or registration completed: a user and their session token.
    LoginSucceeded { user: User, token: String },

    /// The visitor signed out. Clears both user and token.
    LoggedOut,

    /// A token found in device storage at startup. Does not authenticate.
    TokenRestored { token: String },

    /// Merge profile edits into the signed-in user. No-op when signed out.
    ProfileUpdated {
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    },
}

// =============================================================================
// Auth State
// =============================================================================

/// The session: an optional signed-in user plus the opaque token that
/// represents them to whatever backend eventually exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthState {
    user: Option<User>,
    token: Option<String>,
}

impl AuthState {
    /// Creates a signed-out state.
    pub fn new() -> Self {
        AuthState::default()
    }

    /// Applies one action to the session.
    pub fn apply(&mut self, action: AuthAction) -> CoreResult<()> {
        match action {
            AuthAction::LoginSucceeded { user, token } => {
                self.user = Some(user);
                self.token = Some(token);
            }

            AuthAction::LoggedOut => {
                self.user = None;
                self.token = None;
            }

            AuthAction::TokenRestored { token } => {
                self.token = Some(token);
            }

            AuthAction::ProfileUpdated {
                first_name,
                last_name,
                email,
            } => {
                if let Some(user) = self.user.as_mut() {
                    if let Some(first_name) = first_name {
                        user.first_name = first_name;
                    }
                    if let Some(last_name) = last_name {
                        user.last_name = last_name;
                    }
                    if let Some(email) = email {
                        user.email = email;
                    }
                }
            }
        }

        Ok(())
    }

    /// True only when a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The session token, if any (may exist without a user after restore).
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
