//! Draft validation: fail fast, first violation wins.

use crate::{ProfileDraft, ValidationError};

/// Minimum length for a new password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate a draft before commit.
///
/// Identity fields are checked first; the password sub-block is skipped
/// entirely when all three of its fields are empty (password unchanged).
/// The first failing rule wins; later rules are not evaluated.
pub fn validate(draft: &ProfileDraft) -> Result<(), ValidationError> {
    if !required_fields_ok(draft) {
        return Err(ValidationError::RequiredFields);
    }

    if !draft.wants_password_change() {
        return Ok(());
    }

    if draft.old_password.is_empty() {
        return Err(ValidationError::OldPasswordMissing);
    }
    if draft.new_password.is_empty() {
        return Err(ValidationError::NewPasswordMissing);
    }
    if draft.new_password != draft.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if draft.new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

fn required_fields_ok(draft: &ProfileDraft) -> bool {
    let email_ok = !draft.email.is_empty() && draft.email.contains('@');

    email_ok
        && !draft.first_name.is_empty()
        && !draft.last_name.is_empty()
        && !draft.phone_code.is_empty()
        && !draft.phone.is_empty()
}
