//! Session management for the account client core.
//!
//! Owns login submission against the remote credential service, the local
//! session lifecycle (load/save/clear/delete), device-context derivation for
//! the login request, and the derived display values (avatar, full name).
//! Profile commits are local-only: the one network call this crate makes is
//! login.

mod device;
mod error;
mod manager;
mod model;

pub use device::{browser_family, device_token, os_label, DeviceProfile};
pub use error::{AuthError, AuthResult};
pub use manager::SessionManager;
pub use model::{LoginRequest, LoginResponse, ProfilePatch};

pub use client_storage::UserSession;
