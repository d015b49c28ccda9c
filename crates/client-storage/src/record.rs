//! The persisted user record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The authenticated identity record, as returned by the credential service
/// and persisted locally.
///
/// Known fields are typed; anything else the server sends rides along in
/// `extra` and round-trips untouched. Field names on the wire are camelCase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Avatar reference; either an asset URL or an inline data URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Opaque server passthrough fields not otherwise modeled.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let session = UserSession {
            first_name: Some("A".to_string()),
            phone_code: Some("965".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["firstName"], "A");
        assert_eq!(json["phoneCode"], "965");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_unknown_fields_roundtrip_through_extra() {
        let raw = r#"{"firstName":"A","membershipTier":"gold","points":12}"#;
        let session: UserSession = serde_json::from_str(raw).unwrap();

        assert_eq!(session.first_name.as_deref(), Some("A"));
        assert_eq!(session.extra["membershipTier"], "gold");
        assert_eq!(session.extra["points"], 12);

        let back = serde_json::to_value(&session).unwrap();
        assert_eq!(back["membershipTier"], "gold");
        assert_eq!(back["points"], 12);
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let session = UserSession::default();
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, "{}");
    }
}
