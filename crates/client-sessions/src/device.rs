//! Device-context derivation for the login request.

use chrono::Utc;
use rand::Rng;

/// Runtime identification strings the derivation functions read.
///
/// Injected at session-manager construction; an embedding shell that knows
/// its user-agent string passes it here.
#[derive(Debug, Clone, Default)]
pub struct DeviceProfile {
    pub user_agent: String,
    pub platform: String,
}

impl DeviceProfile {
    /// Create a profile from explicit user-agent and platform strings.
    pub fn new(user_agent: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            platform: platform.into(),
        }
    }

    /// Derive a profile from the host OS when no embedder strings exist.
    pub fn from_host() -> Self {
        let platform = match std::env::consts::OS {
            "windows" => "Win32",
            "macos" => "MacIntel",
            "linux" => "Linux x86_64",
            other => other,
        };
        Self {
            user_agent: String::new(),
            platform: platform.to_string(),
        }
    }
}

/// Coarse browser family from a user-agent string.
///
/// Ordered substring match; first match wins. Order matters because some
/// user-agent strings match more than one token (Chrome UAs also contain
/// "Safari").
pub fn browser_family(user_agent: &str) -> &'static str {
    if user_agent.contains("Chrome") {
        "Chrome"
    } else if user_agent.contains("Safari") {
        "Safari"
    } else if user_agent.contains("Firefox") {
        "Firefox"
    } else if user_agent.contains("Edge") {
        "Edge"
    } else {
        "Unknown"
    }
}

/// Coarse OS label from platform and user-agent strings.
///
/// The platform string is checked first; when it is inconclusive the
/// user-agent decides Android/iOS; the raw platform string is the fallback.
pub fn os_label(platform: &str, user_agent: &str) -> String {
    if platform.contains("Win") {
        return "Windows".to_string();
    }
    if platform.contains("Mac") {
        return "MacOS".to_string();
    }
    if platform.contains("Linux") {
        return "Linux".to_string();
    }
    if user_agent.contains("Android") {
        return "Android".to_string();
    }
    if ["iPhone", "iPad", "iPod"].iter().any(|t| user_agent.contains(t)) {
        return "iOS".to_string();
    }
    platform.to_string()
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_FRAGMENT_LEN: usize = 13;

/// Session-scoped pseudo-unique device token:
/// `"web_" + millisecond timestamp + "_" + random base36 fragment`.
///
/// A correlation id for the server, not cryptographically secure.
pub fn device_token() -> String {
    let mut rng = rand::thread_rng();
    let fragment: String = (0..TOKEN_FRAGMENT_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("web_{}_{}", Utc::now().timestamp_millis(), fragment)
}
