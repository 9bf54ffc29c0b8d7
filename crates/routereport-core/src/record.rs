//! Resolved route records.
//!
//! These are the intermediate representation between collection and
//! rendering: flat, immutable, and serializable so that structured
//! consumers of `info()` can take them as JSON instead of rendered text.

use serde::Serialize;

/// A resolved auth strategy or scope value.
///
/// The "none configured" sentinel is a variant rather than a magic
/// string, so structured consumers can tell "no auth" apart from a
/// strategy that happens to be named oddly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthValue {
    /// A concrete, comma-joined strategy or scope list.
    Configured(String),
    /// Nothing applies to this route.
    NoneConfigured,
}

impl AuthValue {
    /// Text form used by the table renderer. The sentinel renders as
    /// `none` (styled negative by the presentation layer).
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Configured(value) => value,
            Self::NoneConfigured => "none",
        }
    }

    /// Whether this is the "none configured" sentinel.
    #[must_use]
    pub fn is_none_configured(&self) -> bool {
        matches!(self, Self::NoneConfigured)
    }
}

/// One fully resolved route, ready for ordering and rendering.
///
/// `auth` and `scope` are `Some` only when the corresponding render
/// toggle is enabled; when a toggle is off the field is absent from the
/// record (and from its JSON form), not merely empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRecord {
    /// Upper-cased HTTP verb.
    pub method: String,
    /// Path template, verbatim (placeholders preserved).
    pub path: String,
    /// Description, empty string if none was declared.
    pub description: String,
    /// Effective auth strategy, present iff the auth column is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthValue>,
    /// Effective auth scope, present iff the scope column is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<AuthValue>,
}

/// One served address with its sorted route records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionInfo {
    /// Base URI of the listener.
    pub uri: String,
    /// Route records, ordered by path.
    pub routes: Vec<RouteRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_display_text() {
        assert_eq!(AuthValue::NoneConfigured.display_text(), "none");
        assert_eq!(
            AuthValue::Configured("session,token".into()).display_text(),
            "session,token"
        );
    }

    #[test]
    fn absent_fields_are_skipped_in_json() {
        let record = RouteRecord {
            method: "GET".into(),
            path: "/users".into(),
            description: String::new(),
            auth: None,
            scope: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("auth"));
        assert!(!object.contains_key("scope"));
    }

    #[test]
    fn present_fields_serialize_as_tagged_values() {
        let record = RouteRecord {
            method: "GET".into(),
            path: "/users".into(),
            description: String::new(),
            auth: Some(AuthValue::Configured("session".into())),
            scope: Some(AuthValue::NoneConfigured),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["auth"]["configured"], "session");
        assert_eq!(json["scope"], "none_configured");
    }
}
