//! Profile editing for the account client core.
//!
//! Owns the form-state machine for editing identity fields and optionally
//! changing the password: a working draft seeded from the current session,
//! fail-fast validation before any mutation is committed, transient UI
//! feedback (busy flag, timed success/error messages), and the
//! confirmation-gated account-lifecycle actions.

mod confirm;
mod draft;
mod editor;
mod error;
mod validate;

pub use confirm::ConfirmationGate;
pub use draft::ProfileDraft;
pub use editor::{
    ProfileEditor, DELETE_ACCOUNT_PROMPT, LOGOUT_PROMPT, MESSAGE_CLEAR_DELAY,
};
pub use error::{ProfileError, ValidationError};
pub use validate::{validate, MIN_PASSWORD_LEN};
