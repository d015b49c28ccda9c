//! Storage key constants.

/// Storage keys used by the client
pub struct StorageKeys;

impl StorageKeys {
    /// Serialized user session (JSON). Presence of this key is the sole
    /// truth for "is logged in".
    pub const USER_SESSION: &'static str = "userData";
}
