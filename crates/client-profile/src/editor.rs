//! The profile edit controller.

use crate::{validate, ConfirmationGate, ProfileDraft, ProfileError};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use client_sessions::{ProfilePatch, SessionManager};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// How long a terminal message stays visible before it auto-clears.
pub const MESSAGE_CLEAR_DELAY: Duration = Duration::from_secs(4);

/// Confirmation prompt shown before logout.
pub const LOGOUT_PROMPT: &str = "Are you sure you want to logout?";

/// Confirmation prompt shown before account deletion.
pub const DELETE_ACCOUNT_PROMPT: &str =
    "Are you sure you want to delete your account? This action cannot be undone.";

const SUCCESS_MESSAGE: &str = "Profile updated successfully!";
const COMMIT_FAILED_MESSAGE: &str = "Failed to update profile. Please try again.";

/// Transient UI feedback. `error_msg` and `success_msg` are mutually
/// exclusive in practice, though not enforced by type.
#[derive(Default)]
struct Feedback {
    saving: bool,
    error_msg: String,
    success_msg: String,
}

/// Controller for the profile edit surface.
///
/// Owns the working draft and the three observable flags (`saving`,
/// `error_msg`, `success_msg`). Validation runs before any mutation is
/// committed; commits go through the session manager and never touch the
/// network. Terminal messages auto-clear after [`MESSAGE_CLEAR_DELAY`];
/// each new message cancels the pending clear first, so the last message
/// always wins.
///
/// The `saving` flag is advisory: callers disable the submit control while
/// it is set; overlapping submits are not queued or rejected here.
pub struct ProfileEditor {
    manager: Arc<SessionManager>,
    /// The editable working copy, bound to the form inputs.
    pub draft: ProfileDraft,
    feedback: Arc<Mutex<Feedback>>,
    clear_task: Mutex<Option<JoinHandle<()>>>,
}

impl ProfileEditor {
    /// Create a controller with a draft seeded from the current session.
    pub fn new(manager: Arc<SessionManager>) -> Self {
        let draft = ProfileDraft::from_session(manager.current_session().as_ref());
        Self {
            manager,
            draft,
            feedback: Arc::new(Mutex::new(Feedback::default())),
            clear_task: Mutex::new(None),
        }
    }

    /// Whether a commit is currently in flight.
    pub fn saving(&self) -> bool {
        self.feedback.lock().unwrap().saving
    }

    /// The current error message, empty when none.
    pub fn error_msg(&self) -> String {
        self.feedback.lock().unwrap().error_msg.clone()
    }

    /// The current success message, empty when none.
    pub fn success_msg(&self) -> String {
        self.feedback.lock().unwrap().success_msg.clone()
    }

    /// Validate the draft and, on success, commit the identity fields.
    ///
    /// Fail fast: the first violated rule produces its message and nothing
    /// is persisted. Password fields are write-only trigger inputs; on a
    /// successful commit they reset to empty while the identity fields keep
    /// the new values.
    pub async fn submit(&mut self) -> Result<(), ProfileError> {
        if let Err(rule) = validate(&self.draft) {
            debug!(rule = %rule, "Profile draft rejected");
            self.set_error(rule.to_string());
            return Err(rule.into());
        }

        {
            let mut feedback = self.feedback.lock().unwrap();
            feedback.saving = true;
            feedback.error_msg.clear();
            feedback.success_msg.clear();
        }

        let result = self.manager.update_profile(&self.draft.identity_patch());

        self.feedback.lock().unwrap().saving = false;

        match result {
            Ok(()) => {
                self.draft.reset_password_fields();
                self.set_success(SUCCESS_MESSAGE.to_string());
                Ok(())
            }
            Err(e) => {
                warn!("Profile commit failed: {}", e);
                self.set_error(COMMIT_FAILED_MESSAGE.to_string());
                Err(ProfileError::Persistence)
            }
        }
    }

    /// Replace the avatar with a locally selected image.
    ///
    /// Reads the file, encodes it into an inline data URL, stores it on the
    /// session's `image` field and persists immediately. No size or type
    /// constraint is enforced.
    pub async fn set_avatar_from_file(&self, path: &Path) -> Result<(), ProfileError> {
        let bytes = tokio::fs::read(path).await?;
        let data_url = format!("data:{};base64,{}", mime_for_path(path), BASE64.encode(&bytes));

        let patch = ProfilePatch {
            image: Some(data_url),
            ..Default::default()
        };
        self.manager
            .update_profile(&patch)
            .map_err(|_| ProfileError::Persistence)
    }

    /// Logout behind an interactive confirmation.
    ///
    /// Returns true when the user confirmed and the session was cleared;
    /// the caller then leaves the authenticated area.
    pub fn logout(&self, gate: &dyn ConfirmationGate) -> bool {
        if !gate.confirm(LOGOUT_PROMPT) {
            return false;
        }
        self.manager.logout();
        true
    }

    /// Delete the account behind a stronger interactive confirmation.
    ///
    /// Returns true when the user confirmed and the account data was wiped;
    /// the caller then leaves the authenticated area.
    pub fn delete_account(&self, gate: &dyn ConfirmationGate) -> bool {
        if !gate.confirm(DELETE_ACCOUNT_PROMPT) {
            return false;
        }
        self.manager.delete_account();
        true
    }

    fn set_error(&self, message: String) {
        {
            let mut feedback = self.feedback.lock().unwrap();
            feedback.error_msg = message;
            feedback.success_msg.clear();
        }
        self.schedule_clear();
    }

    fn set_success(&self, message: String) {
        {
            let mut feedback = self.feedback.lock().unwrap();
            feedback.success_msg = message;
            feedback.error_msg.clear();
        }
        self.schedule_clear();
    }

    /// Blank both messages after the delay. A new message cancels the
    /// pending clear before scheduling its own, so a stale timer can never
    /// blank a newer message.
    fn schedule_clear(&self) {
        let mut slot = self.clear_task.lock().unwrap();
        if let Some(task) = slot.take() {
            task.abort();
        }

        let feedback = Arc::clone(&self.feedback);
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(MESSAGE_CLEAR_DELAY).await;
            let mut feedback = feedback.lock().unwrap();
            feedback.error_msg.clear();
            feedback.success_msg.clear();
        }));
    }
}

impl Drop for ProfileEditor {
    fn drop(&mut self) {
        if let Some(task) = self.clear_task.lock().unwrap().take() {
            task.abort();
        }
    }
}

fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
