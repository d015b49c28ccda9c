//! End-to-end profile edit flow over file-backed storage.

use client_config_and_utils::{Config, Paths};
use client_profile::{ConfirmationGate, ProfileEditor};
use client_sessions::{DeviceProfile, SessionManager};
use client_storage::{create_storage, SessionStore, UserSession};
use std::sync::Arc;

struct Accept;
impl ConfirmationGate for Accept {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

fn manager_at(paths: &Paths) -> Arc<SessionManager> {
    Arc::new(SessionManager::new(
        SessionStore::new(create_storage(paths)),
        Config::default(),
        DeviceProfile::default(),
    ))
}

fn seed(paths: &Paths) {
    let store = SessionStore::new(create_storage(paths));
    assert!(store.save(&UserSession {
        id: Some("u-1".to_string()),
        first_name: Some("A".to_string()),
        last_name: Some("B".to_string()),
        email: Some("a@b.com".to_string()),
        phone_code: Some("965".to_string()),
        phone: Some("55501234".to_string()),
        ..Default::default()
    }));
}

#[tokio::test]
async fn edited_profile_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let paths = Paths::with_base_dir(dir.path().to_path_buf());
    seed(&paths);

    {
        let manager = manager_at(&paths);
        let mut editor = ProfileEditor::new(Arc::clone(&manager));

        editor.draft.first_name = "Zed".to_string();
        editor.draft.phone = "99900011".to_string();
        editor.submit().await.unwrap();
    }

    // A fresh manager over the same directory sees the committed values
    let reopened = manager_at(&paths);
    assert!(reopened.is_authenticated());
    assert_eq!(reopened.full_name(), "Zed B");
    assert_eq!(
        reopened.current_session().unwrap().phone.as_deref(),
        Some("99900011")
    );
}

#[tokio::test]
async fn password_change_flow_commits_identity_only() {
    let dir = tempfile::tempdir().unwrap();
    let paths = Paths::with_base_dir(dir.path().to_path_buf());
    seed(&paths);

    let manager = manager_at(&paths);
    let mut editor = ProfileEditor::new(Arc::clone(&manager));

    editor.draft.last_name = "Changed".to_string();
    editor.draft.old_password = "oldpass".to_string();
    editor.draft.new_password = "abc123".to_string();
    editor.draft.confirm_password = "abc123".to_string();

    editor.submit().await.unwrap();

    let stored = SessionStore::new(create_storage(&paths)).load().unwrap();
    assert_eq!(stored.last_name.as_deref(), Some("Changed"));
    // Passwords are trigger inputs only; nothing password-shaped is stored
    let raw = serde_json::to_string(&stored).unwrap();
    assert!(!raw.to_lowercase().contains("password"));
}

#[tokio::test]
async fn logout_clears_the_stored_session() {
    let dir = tempfile::tempdir().unwrap();
    let paths = Paths::with_base_dir(dir.path().to_path_buf());
    seed(&paths);

    let manager = manager_at(&paths);
    let editor = ProfileEditor::new(Arc::clone(&manager));

    assert!(editor.logout(&Accept));

    let reopened = manager_at(&paths);
    assert!(!reopened.is_authenticated());
}

#[tokio::test]
async fn delete_account_wipes_the_namespace() {
    let dir = tempfile::tempdir().unwrap();
    let paths = Paths::with_base_dir(dir.path().to_path_buf());
    seed(&paths);

    let manager = manager_at(&paths);
    let editor = ProfileEditor::new(Arc::clone(&manager));

    assert!(editor.delete_account(&Accept));

    assert!(!paths.session_file().exists());
    assert!(!manager_at(&paths).is_authenticated());
}
