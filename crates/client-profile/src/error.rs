//! Profile editing error types.

use thiserror::Error;

/// A draft that failed validation. The display strings are the exact
/// user-facing messages; the first violated rule wins and later rules are
/// not evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required identity field is empty or the email is malformed
    #[error("Please fill all required fields correctly.")]
    RequiredFields,

    /// Password change requested without the old password
    #[error("Please enter your old password.")]
    OldPasswordMissing,

    /// Password change requested without a new password
    #[error("Please enter a new password.")]
    NewPasswordMissing,

    /// New password and its confirmation differ
    #[error("New password and confirm password do not match.")]
    PasswordMismatch,

    /// New password below the minimum length
    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,
}

/// Profile editing error type.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The draft failed validation; nothing was persisted
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The commit could not be persisted
    #[error("Failed to update profile. Please try again.")]
    Persistence,

    /// The selected avatar file could not be read
    #[error("Failed to read avatar file: {0}")]
    AvatarRead(#[from] std::io::Error),
}
