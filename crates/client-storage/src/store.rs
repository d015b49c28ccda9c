//! High-level adapter over the storage backend for the one persisted session.

use crate::{SessionStorage, StorageKeys, UserSession};

/// Adapter owning the serialized user record.
///
/// All failure modes are swallowed here: callers never see a storage or
/// parse error, only "no session" or an unsuccessful save. Diagnostics go
/// to the log.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
}

impl SessionStore {
    /// Create a new session store over the given storage backend.
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Load the stored session.
    ///
    /// Returns `None` when no record is stored, when the backend fails, or
    /// when the stored content does not parse. Callers see all three as
    /// "not authenticated".
    pub fn load(&self) -> Option<UserSession> {
        let raw = match self.storage.get(StorageKeys::USER_SESSION) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read stored session: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<UserSession>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Stored session did not parse, treating as logged out: {}", e);
                None
            }
        }
    }

    /// Serialize and persist the session, replacing any prior record.
    ///
    /// Returns `false` on failure. Failure is non-fatal: the caller-held
    /// in-memory copy stays usable for the current view lifetime, it just
    /// will not survive a restart. A failed save leaves whatever was stored
    /// before untouched.
    pub fn save(&self, session: &UserSession) -> bool {
        let raw = match serde_json::to_string(session) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Failed to serialize session: {}", e);
                return false;
            }
        };

        match self.storage.set(StorageKeys::USER_SESSION, &raw) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to persist session: {}", e);
                false
            }
        }
    }

    /// Remove the stored session. Idempotent.
    pub fn clear(&self) {
        if let Err(e) = self.storage.delete(StorageKeys::USER_SESSION) {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
    }

    /// Wipe the entire storage namespace. Used only by account deletion.
    /// Idempotent.
    pub fn clear_all(&self) {
        if let Err(e) = self.storage.clear_all() {
            tracing::warn!("Failed to wipe storage namespace: {}", e);
        }
    }
}
