//! Authentication error types.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Transport failure: the credential endpoint could not be reached
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// The server rejected the login and supplied its own message
    #[error("Login rejected by server (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// Malformed or unexplained protocol failure; treated as bad credentials
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Session could not be persisted
    #[error("Session could not be persisted")]
    Persistence,
}

impl AuthError {
    /// The short user-facing string for this error.
    ///
    /// Connectivity failures are reported first, then a server-supplied
    /// message when one exists, else the generic invalid-credentials line.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Network(_) => "Network error. Please check your connection.".to_string(),
            AuthError::Server { message, .. } => message.clone(),
            AuthError::Persistence => "Failed to update profile. Please try again.".to_string(),
            AuthError::InvalidCredentials => {
                "Invalid email or password. Please try again.".to_string()
            }
        }
    }
}

/// Result type alias using AuthError.
pub type AuthResult<T> = Result<T, AuthError>;
