//! Session manager: login, session lifecycle, derived display values.

use crate::device::{browser_family, device_token, os_label, DeviceProfile};
use crate::model::{ErrorBody, LoginRequest, LoginResponse, ProfilePatch};
use crate::{AuthError, AuthResult};
use client_config_and_utils::Config;
use client_storage::{SessionStore, UserSession};
use reqwest::Client;
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// Country code sent on every login request.
const DEFAULT_PHONE_CODE: &str = "965";
/// Device type reported for this client.
const DEVICE_TYPE: &str = "web";
/// Client version reported on login.
const APP_VERSION: &str = "1.0.0";
/// Avatar asset used when the session carries no image reference.
const DEFAULT_AVATAR: &str = "assets/default-avatar.png";

/// Session manager over an injected store handle.
///
/// Holds a cached copy of the session for the duration of a view's lifetime;
/// the store stays the source of truth and is re-read on [`reload`].
/// The only network call made here is [`login`] — profile commits are
/// local-only.
///
/// [`reload`]: SessionManager::reload
/// [`login`]: SessionManager::login
pub struct SessionManager {
    store: SessionStore,
    config: Config,
    device: DeviceProfile,
    http_client: Client,
    cached: Mutex<Option<UserSession>>,
}

impl SessionManager {
    /// Create a new session manager. The cache is seeded from the store.
    pub fn new(store: SessionStore, config: Config, device: DeviceProfile) -> Self {
        let cached = Mutex::new(store.load());
        Self {
            store,
            config,
            device,
            http_client: Client::new(),
            cached,
        }
    }

    /// True iff a session is currently stored. Pure derived query.
    pub fn is_authenticated(&self) -> bool {
        self.store.load().is_some()
    }

    /// The cached session, if any.
    pub fn current_session(&self) -> Option<UserSession> {
        self.cached.lock().unwrap().clone()
    }

    /// Re-read the store as the source of truth and return the result.
    pub fn reload(&self) -> Option<UserSession> {
        let session = self.store.load();
        *self.cached.lock().unwrap() = session.clone();
        session
    }

    /// Login with email and password.
    ///
    /// Issues exactly one request to the credential endpoint; no retry. A
    /// response carrying a `data` payload is persisted and cached. A success
    /// response without `data` is returned as-is: a successful network
    /// outcome with an empty result, which callers treat as "user does not
    /// exist".
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<LoginResponse> {
        let payload = LoginRequest {
            email: email.to_string(),
            phone: String::new(),
            phone_code: DEFAULT_PHONE_CODE.to_string(),
            password: password.to_string(),
            device_token: device_token(),
            device_type: DEVICE_TYPE.to_string(),
            device_model: self.device_label().to_string(),
            app_version: APP_VERSION.to_string(),
            os_version: self.os_label(),
        };

        let login_url = self.config.login_url();
        debug!(url = %login_url, email = %email, "Attempting login");

        let response = self
            .http_client
            .post(&login_url)
            .header("Content-Type", "application/json")
            .header("auth", &self.config.api_auth_header)
            .json(&payload)
            .send()
            .await
            .map_err(AuthError::Network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Login failed");

            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            return Err(match message {
                Some(message) if !message.is_empty() => AuthError::Server {
                    status: status.as_u16(),
                    message,
                },
                _ => AuthError::InvalidCredentials,
            });
        }

        let parsed: LoginResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Login response did not parse: {}", e);
                return Err(AuthError::InvalidCredentials);
            }
        };

        match &parsed.data {
            Some(session) => {
                // Save failure is non-fatal: the cached copy carries the
                // view through its lifetime, it just won't survive reload.
                self.store.save(session);
                *self.cached.lock().unwrap() = Some(session.clone());
                info!(email = %email, "Login successful");
            }
            None => {
                debug!(email = %email, "Login succeeded with empty result");
            }
        }

        Ok(parsed)
    }

    /// Shallow-merge the patch over the stored session and persist it.
    ///
    /// No-op success when no session exists. Never touches the network.
    pub fn update_profile(&self, patch: &ProfilePatch) -> AuthResult<()> {
        let Some(mut session) = self.store.load() else {
            return Ok(());
        };

        patch.apply_to(&mut session);

        if !self.store.save(&session) {
            return Err(AuthError::Persistence);
        }

        *self.cached.lock().unwrap() = Some(session);
        Ok(())
    }

    /// Logout by clearing the stored session.
    pub fn logout(&self) {
        self.store.clear();
        *self.cached.lock().unwrap() = None;
        info!("Logged out");
    }

    /// Delete the account locally by wiping the whole storage namespace.
    pub fn delete_account(&self) {
        self.store.clear_all();
        *self.cached.lock().unwrap() = None;
        info!("Account data deleted");
    }

    /// Coarse browser family derived from the user-agent string.
    pub fn device_label(&self) -> &'static str {
        browser_family(&self.device.user_agent)
    }

    /// Coarse OS label derived from platform and user-agent strings.
    pub fn os_label(&self) -> String {
        os_label(&self.device.platform, &self.device.user_agent)
    }

    /// Fresh session-scoped device token.
    pub fn device_token(&self) -> String {
        device_token()
    }

    /// Avatar reference with fallback: `image`, then `profileImage`, then
    /// the default asset.
    pub fn avatar(&self) -> String {
        let cached = self.cached.lock().unwrap();
        cached
            .as_ref()
            .and_then(|s| s.image.clone().or_else(|| s.profile_image.clone()))
            .unwrap_or_else(|| DEFAULT_AVATAR.to_string())
    }

    /// Display name: first name (default "User") + last name, trimmed.
    pub fn full_name(&self) -> String {
        let cached = self.cached.lock().unwrap();
        let first = cached
            .as_ref()
            .and_then(|s| s.first_name.clone())
            .unwrap_or_else(|| "User".to_string());
        let last = cached
            .as_ref()
            .and_then(|s| s.last_name.clone())
            .unwrap_or_default();
        format!("{} {}", first, last).trim().to_string()
    }
}
