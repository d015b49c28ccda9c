//! The editable working copy of the profile.

use client_sessions::ProfilePatch;
use client_storage::UserSession;

/// Country code used when the session carries none.
const DEFAULT_PHONE_CODE: &str = "965";

/// The editable working copy: required identity fields plus the optional
/// password-change sub-block, all plain strings bound to form inputs.
///
/// The password sub-block is all-or-nothing: if any of its three fields is
/// non-empty, all three must satisfy the password-change rules before a
/// commit goes through. Nothing here is persisted until a submit validates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_code: String,
    pub phone: String,
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ProfileDraft {
    /// Seed a draft from the current session. Password fields start empty.
    pub fn from_session(session: Option<&UserSession>) -> Self {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();

        match session {
            Some(session) => Self {
                first_name: field(&session.first_name),
                last_name: field(&session.last_name),
                email: field(&session.email),
                phone_code: session
                    .phone_code
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PHONE_CODE.to_string()),
                phone: field(&session.phone),
                ..Default::default()
            },
            None => Self {
                phone_code: DEFAULT_PHONE_CODE.to_string(),
                ..Default::default()
            },
        }
    }

    /// True when any password sub-block field is non-empty.
    pub fn wants_password_change(&self) -> bool {
        !self.old_password.is_empty()
            || !self.new_password.is_empty()
            || !self.confirm_password.is_empty()
    }

    /// Blank the password sub-block, leaving identity fields alone.
    pub fn reset_password_fields(&mut self) {
        self.old_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
    }

    /// The identity fields as a commit patch. Password fields are
    /// write-only trigger inputs and never leave the draft.
    pub(crate) fn identity_patch(&self) -> ProfilePatch {
        ProfilePatch {
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            email: Some(self.email.clone()),
            phone_code: Some(self.phone_code.clone()),
            phone: Some(self.phone.clone()),
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_from_session() {
        let session = UserSession {
            first_name: Some("A".to_string()),
            last_name: Some("B".to_string()),
            email: Some("a@b.com".to_string()),
            phone_code: Some("971".to_string()),
            phone: Some("55501234".to_string()),
            ..Default::default()
        };

        let draft = ProfileDraft::from_session(Some(&session));
        assert_eq!(draft.first_name, "A");
        assert_eq!(draft.phone_code, "971");
        assert_eq!(draft.old_password, "");
    }

    #[test]
    fn test_seeded_phone_code_default() {
        let draft = ProfileDraft::from_session(Some(&UserSession::default()));
        assert_eq!(draft.phone_code, "965");

        let draft = ProfileDraft::from_session(None);
        assert_eq!(draft.phone_code, "965");
    }

    #[test]
    fn test_wants_password_change() {
        let mut draft = ProfileDraft::default();
        assert!(!draft.wants_password_change());

        draft.confirm_password = "x".to_string();
        assert!(draft.wants_password_change());
    }

    #[test]
    fn test_reset_password_fields_keeps_identity() {
        let mut draft = ProfileDraft {
            first_name: "A".to_string(),
            old_password: "old".to_string(),
            new_password: "new".to_string(),
            confirm_password: "new".to_string(),
            ..Default::default()
        };

        draft.reset_password_fields();
        assert_eq!(draft.first_name, "A");
        assert!(!draft.wants_password_change());
    }
}
