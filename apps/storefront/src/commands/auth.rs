//! # Auth Commands
//!
//! Login, registration, logout, and session queries.
//!
//! ## Mock Backend
//! There is no server in this build: any well-formed credentials sign in a
//! mock account, and the "session token" is a locally minted UUID persisted
//! under the `"token"` key. The command surface is shaped so a real backend
//! can slot in behind it without the UI noticing.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use folio_core::types::{User, UserRole};
use folio_core::validation::{validate_email, validate_name, validate_password};

use crate::error::ApiError;
use crate::state::AuthStore;

// =============================================================================
// DTOs
// =============================================================================

/// Registration form payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// What the UI knows about the session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub is_authenticated: bool,
    pub user: Option<User>,
}

impl SessionResponse {
    fn from_store(auth: &AuthStore) -> Self {
        SessionResponse {
            is_authenticated: auth.state().is_authenticated(),
            user: auth.state().current_user().cloned(),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Signs in with email and password.
///
/// ## Errors
/// `ValidationError` for a malformed email or an undersized password. With
/// the mock backend those are the only ways to fail.
pub fn login(
    auth: &mut AuthStore,
    email: &str,
    password: &str,
) -> Result<SessionResponse, ApiError> {
    debug!(email, "login command");

    validate_email(email)?;
    validate_password(password)?;

    let user = mock_user("Alex", "Reader", email);
    let token = Uuid::new_v4().to_string();
    auth.sign_in(user, token)?;

    Ok(SessionResponse::from_store(auth))
}

/// Creates an account and signs it in.
pub fn register(auth: &mut AuthStore, req: &RegisterRequest) -> Result<SessionResponse, ApiError> {
    debug!(email = %req.email, "register command");

    validate_name("first name", &req.first_name)?;
    validate_name("last name", &req.last_name)?;
    validate_email(&req.email)?;
    validate_password(&req.password)?;

    let user = mock_user(&req.first_name, &req.last_name, &req.email);
    let token = Uuid::new_v4().to_string();
    auth.sign_in(user, token)?;

    Ok(SessionResponse::from_store(auth))
}

/// Signs out and forgets the persisted token.
pub fn logout(auth: &mut AuthStore) -> Result<SessionResponse, ApiError> {
    debug!("logout command");

    auth.sign_out()?;
    Ok(SessionResponse::from_store(auth))
}

/// Current session state.
pub fn session(auth: &AuthStore) -> SessionResponse {
    debug!("session command");
    SessionResponse::from_store(auth)
}

/// Merges profile edits into the signed-in user.
///
/// A no-op while signed out, mirroring the page this backs.
pub fn update_profile(
    auth: &mut AuthStore,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
) -> Result<SessionResponse, ApiError> {
    debug!("update_profile command");

    if let Some(first_name) = &first_name {
        validate_name("first name", first_name)?;
    }
    if let Some(last_name) = &last_name {
        validate_name("last name", last_name)?;
    }
    if let Some(email) = &email {
        validate_email(email)?;
    }

    auth.update_profile(first_name, last_name, email)?;
    Ok(SessionResponse::from_store(auth))
}

fn mock_user(first_name: &str, last_name: &str, email: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4().to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        role: UserRole::User,
        is_premium: false,
        created_at: now,
        updated_at: now,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
