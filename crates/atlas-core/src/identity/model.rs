//! Identity domain model.
//!
//! An identity is the alias a member chose at the gateway, the PIN they typed
//! alongside it, and optional avatar settings. There is no credential check
//! against prior state anywhere in the application: any alias/PIN pair is
//! accepted and simply replaces the session identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The active member identity for a session.
///
/// Persisted wholesale to the identity snapshot on login and on every
/// profile update, and removed on logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Display alias (non-empty, unique per session by convention only)
    pub alias: String,
    /// Four-digit PIN as typed. Stored and compared in the clear; the format
    /// is a UI hint, not a validated constraint.
    pub pin: String,
    /// When this identity first joined
    pub joined_at: DateTime<Utc>,
    /// Seed for the generated avatar, if one was picked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_seed: Option<String>,
    /// Accent color for the generated avatar, if one was picked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_color: Option<String>,
}

impl Identity {
    /// Creates a fresh identity joining now, without avatar settings.
    pub fn new(alias: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            pin: pin.into(),
            joined_at: Utc::now(),
            avatar_seed: None,
            avatar_color: None,
        }
    }

    /// Merges the set fields of `patch` into this identity.
    ///
    /// Unset (`None`) fields leave the current values untouched.
    pub fn apply(&mut self, patch: IdentityPatch) {
        if let Some(alias) = patch.alias {
            self.alias = alias;
        }
        if let Some(pin) = patch.pin {
            self.pin = pin;
        }
        if let Some(seed) = patch.avatar_seed {
            self.avatar_seed = Some(seed);
        }
        if let Some(color) = patch.avatar_color {
            self.avatar_color = Some(color);
        }
    }
}

/// A partial identity update.
///
/// Only the fields that are `Some` are applied; `joined_at` is never
/// rewritten after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityPatch {
    pub alias: Option<String>,
    pub pin: Option<String>,
    pub avatar_seed: Option<String>,
    pub avatar_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_merges_only_set_fields() {
        let mut identity = Identity::new("Nora", "1234");
        let joined = identity.joined_at;

        identity.apply(IdentityPatch {
            avatar_seed: Some("seed-7".to_string()),
            ..Default::default()
        });

        assert_eq!(identity.alias, "Nora");
        assert_eq!(identity.pin, "1234");
        assert_eq!(identity.avatar_seed.as_deref(), Some("seed-7"));
        assert_eq!(identity.avatar_color, None);
        assert_eq!(identity.joined_at, joined);
    }

    #[test]
    fn test_timestamp_round_trips_through_json() {
        let identity = Identity::new("Nora", "1234");
        let json = serde_json::to_string(&identity).unwrap();
        let restored: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, identity);
    }
}
