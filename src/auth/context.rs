//! # Authentication Context
//!
//! Caller identity carried with each request. Built explicitly per
//! request by the HTTP layer and passed into every service call; no
//! ambient request globals.

use uuid::Uuid;

use super::errors::{AuthError, AuthResult};

/// Auth context carried with each request
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    /// The authenticated user's ID (None if anonymous)
    pub user_id: Option<Uuid>,

    /// Whether the request is authenticated
    pub is_authenticated: bool,
}

impl AuthContext {
    /// Create context for an authenticated user
    pub fn authenticated(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            is_authenticated: true,
        }
    }

    /// Create context for anonymous access
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            is_authenticated: false,
        }
    }

    /// Get the user ID or error if not authenticated
    pub fn require_user_id(&self) -> AuthResult<Uuid> {
        self.user_id.ok_or(AuthError::AuthenticationRequired)
    }
}
