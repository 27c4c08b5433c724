//! Connection request ("bridge") domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a connection request.
///
/// A request starts `Pending` and settles into `Connected` or `Declined` by
/// an action attributed to the receiver. Settled states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStatus {
    Pending,
    Connected,
    Declined,
}

impl ConnectionStatus {
    /// Whether this status is terminal.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// An anonymous peer-to-peer contact request tied to a specific story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequest {
    pub id: String,
    pub sender_alias: String,
    /// The story author being reached out to. Never validated against known
    /// authors.
    pub receiver_alias: String,
    pub story_id: String,
    pub initial_note: String,
    pub status: ConnectionStatus,
    pub timestamp: DateTime<Utc>,
}

impl ConnectionRequest {
    /// Creates a pending request sent now.
    pub fn new(
        sender_alias: impl Into<String>,
        receiver_alias: impl Into<String>,
        story_id: impl Into<String>,
        initial_note: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender_alias: sender_alias.into(),
            receiver_alias: receiver_alias.into(),
            story_id: story_id.into(),
            initial_note: initial_note.into(),
            status: ConnectionStatus::Pending,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(ConnectionStatus::Pending).unwrap(),
            "PENDING"
        );
        assert_eq!(
            serde_json::to_value(ConnectionStatus::Connected).unwrap(),
            "CONNECTED"
        );
        assert_eq!(
            serde_json::to_value(ConnectionStatus::Declined).unwrap(),
            "DECLINED"
        );
    }

    #[test]
    fn test_new_request_is_pending() {
        let request = ConnectionRequest::new("Nora", "Kai", "story-1", "hello");
        assert_eq!(request.status, ConnectionStatus::Pending);
        assert!(!request.status.is_settled());
    }
}
