use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, Role, Session, User, UsersResponse};
use crate::services::api_client::ApiClient;
use crate::services::session_store::SessionStore;
use crate::utils::constants::AUTH_API;

/// Login, registration and session reads. Persisting and clearing the
/// session goes through `SessionStore` only; navigation after logout is the
/// caller's decision, not a side effect of this service.
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// On success the session is persisted atomically; on any failure the
    /// previously stored session (if any) is left untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Logging in as {}", username);

        let response: AuthResponse = self
            .api
            .post(&format!("{}/login", AUTH_API), &request)
            .await?;
        let session = response.into_session()?;
        SessionStore::persist(&session)?;

        log::info!("✅ Login successful: {} ({:?})", session.user.username, session.user.role);
        Ok(session)
    }

    /// Same persistence contract as `login`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        log::info!("📝 Registering account {}", request.username);

        let response: AuthResponse = self
            .api
            .post(&format!("{}/register", AUTH_API), request)
            .await?;
        let session = response.into_session()?;
        SessionStore::persist(&session)?;

        log::info!("✅ Registration successful: {}", session.user.username);
        Ok(session)
    }

    pub async fn all_users(&self) -> Result<Vec<User>, ApiError> {
        let response: UsersResponse = self.api.get(&format!("{}/users", AUTH_API)).await?;
        if !response.success {
            return Err(ApiError::BadResponse);
        }
        Ok(response.users)
    }

    /// Clears the persisted session and nothing else. Callers navigate.
    pub fn logout() {
        SessionStore::clear();
        log::info!("👋 Logged out");
    }

    pub fn current_session() -> Option<Session> {
        SessionStore::load()
    }

    pub fn current_user() -> Option<User> {
        SessionStore::load().map(|s| s.user)
    }

    /// True iff a non-empty credential token is persisted.
    pub fn is_authenticated() -> bool {
        SessionStore::is_authenticated()
    }

    pub fn has_role(role: Role) -> bool {
        Self::current_user().map(|u| u.role == role).unwrap_or(false)
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}
