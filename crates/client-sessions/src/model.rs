//! Wire contract for the credential endpoint and the profile patch type.

use client_storage::UserSession;
use serde::{Deserialize, Serialize};

/// Login request body.
///
/// Field values other than `email`/`password` and the device context are
/// fixed by the wire contract: `phone` is always empty, `phone_code` is the
/// default country code, `device_type` is always `"web"`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub phone: String,
    pub phone_code: String,
    pub password: String,
    pub device_token: String,
    pub device_type: String,
    pub device_model: String,
    pub app_version: String,
    pub os_version: String,
}

/// Credential endpoint response.
///
/// A body with `success: true` and no `data` is a successful network outcome
/// with an empty result: the caller treats it as "user does not exist", it is
/// not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<UserSession>,
}

/// Server error body; only the message is interesting.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}

/// Typed shallow-merge input for profile commits.
///
/// Only `Some` fields overwrite the stored record; everything else,
/// including opaque passthrough fields, is left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_code: Option<String>,
    pub phone: Option<String>,
    /// Avatar reference (asset URL or inline data URL).
    pub image: Option<String>,
}

impl ProfilePatch {
    /// Shallow-merge this patch over the given session.
    pub fn apply_to(&self, session: &mut UserSession) {
        if let Some(v) = &self.first_name {
            session.first_name = Some(v.clone());
        }
        if let Some(v) = &self.last_name {
            session.last_name = Some(v.clone());
        }
        if let Some(v) = &self.email {
            session.email = Some(v.clone());
        }
        if let Some(v) = &self.phone_code {
            session.phone_code = Some(v.clone());
        }
        if let Some(v) = &self.phone {
            session.phone = Some(v.clone());
        }
        if let Some(v) = &self.image {
            session.image = Some(v.clone());
        }
    }
}
