//! API key authentication middleware.
//!
//! This middleware intercepts every album request to:
//! 1. Extract the API key from the Authorization header
//! 2. Resolve it to a role through the configured `Authenticator`
//! 3. Inject authentication context into the request
//! 4. Reject unknown or missing keys with HTTP 401
//!
//! The static key scheme is a shared secret, not a credential system.
//! Swapping in a real backend only requires another `Authenticator`.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Coarse authorization label derived from the presented key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
}

/// Authentication context attached to authenticated requests.
///
/// This struct is inserted into the request's extension map and can be
/// extracted by route handlers with `Extension<AuthContext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// `None` means read-only access
    pub role: Option<Role>,
}

impl AuthContext {
    pub fn read_only() -> Self {
        Self { role: None }
    }

    pub fn admin() -> Self {
        Self {
            role: Some(Role::Admin),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    /// Fail with `Forbidden` unless this context carries the admin role.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

/// Resolves a presented API key to an authentication context.
pub trait Authenticator: Send + Sync {
    /// `api_key` is `None` when the header is absent or not valid UTF-8.
    ///
    /// # Errors
    ///
    /// - `Unauthorized`: the key is missing or not recognized
    fn authenticate(&self, api_key: Option<&str>) -> Result<AuthContext, AppError>;
}

/// Two fixed keys compared by exact string equality: one read-only, one admin.
#[derive(Debug, Clone)]
pub struct StaticKeyAuthenticator {
    read_key: String,
    admin_key: String,
}

impl StaticKeyAuthenticator {
    pub fn new(read_key: impl Into<String>, admin_key: impl Into<String>) -> Self {
        Self {
            read_key: read_key.into(),
            admin_key: admin_key.into(),
        }
    }
}

impl Default for StaticKeyAuthenticator {
    fn default() -> Self {
        Self::new("key1", "key2")
    }
}

impl Authenticator for StaticKeyAuthenticator {
    fn authenticate(&self, api_key: Option<&str>) -> Result<AuthContext, AppError> {
        match api_key {
            Some(key) if key == self.read_key => Ok(AuthContext::read_only()),
            Some(key) if key == self.admin_key => Ok(AuthContext::admin()),
            _ => Err(AppError::Unauthorized),
        }
    }
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Read the raw `Authorization` header (no scheme prefix is expected)
/// 2. Ask the authenticator for a context
/// 3. If accepted: inject `AuthContext` into request, call next handler
/// 4. If rejected: return 401 Unauthorized, the handler never runs
///
/// # Headers
///
/// ```text
/// Authorization: key1
/// ```
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let auth_context = state
        .authenticator
        .authenticate(api_key)
        .inspect_err(|_| {
            tracing::warn!(
                method = %request.method(),
                uri = %request.uri(),
                key_present = api_key.is_some(),
                "Rejected request with invalid API key"
            );
        })?;

    tracing::debug!(admin = auth_context.is_admin(), "Request authenticated");

    // Route handlers can now extract this using Extension<AuthContext>
    request.extensions_mut().insert(auth_context);

    Ok(next.run(request).await)
}
