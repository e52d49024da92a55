use crate::error::ApiError;
use crate::models::{Session, User};
use crate::utils::constants::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};
use crate::utils::storage::{load_from_storage, load_raw, remove_from_storage, save_raw, save_to_storage};

/// Persisted session state. The ONLY writers of these two keys are this
/// store's `persist`/`clear` (called by `AuthService`) and the gateway's
/// 401 handler; presentation components never touch them directly.
pub struct SessionStore;

impl SessionStore {
    /// Write user and token as a pair. If the token write fails the user
    /// entry is rolled back so a half-written session cannot be observed.
    pub fn persist(session: &Session) -> Result<(), ApiError> {
        save_to_storage(STORAGE_KEY_USER, &session.user).map_err(|_| ApiError::Storage)?;
        if save_raw(STORAGE_KEY_TOKEN, &session.token).is_err() {
            remove_from_storage(STORAGE_KEY_USER);
            return Err(ApiError::Storage);
        }
        Ok(())
    }

    /// Soft read: any missing or undecodable entry yields `None`.
    pub fn load() -> Option<Session> {
        let user: User = load_from_storage(STORAGE_KEY_USER)?;
        let token = Self::token()?;
        Some(Session { user, token })
    }

    pub fn token() -> Option<String> {
        load_raw(STORAGE_KEY_TOKEN).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated() -> bool {
        Self::token().is_some()
    }

    pub fn clear() {
        remove_from_storage(STORAGE_KEY_USER);
        remove_from_storage(STORAGE_KEY_TOKEN);
    }
}
