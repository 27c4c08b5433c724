//! The connection-request ledger.

use super::model::{ConnectionRequest, ConnectionStatus};
use serde::{Deserialize, Serialize};

/// All connection requests raised this session, in send order.
///
/// The ledger does not de-duplicate: sending twice for the same
/// (sender, story) pair records two requests. Settling is terminal; once a
/// request is `Connected` or `Declined` no further transition is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionLedger {
    requests: Vec<ConnectionRequest>,
}

impl ConnectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new request.
    pub fn send(&mut self, request: ConnectionRequest) {
        self.requests.push(request);
    }

    /// Settles a pending request into a terminal status.
    ///
    /// No-ops (returning `false`) when the request is missing, already
    /// settled, or the requested status is not terminal.
    pub fn settle(&mut self, request_id: &str, status: ConnectionStatus) -> bool {
        if !status.is_settled() {
            return false;
        }
        match self.requests.iter_mut().find(|r| r.id == request_id) {
            Some(request) if !request.status.is_settled() => {
                request.status = status;
                true
            }
            _ => false,
        }
    }

    /// Finds a request by id.
    pub fn get(&self, request_id: &str) -> Option<&ConnectionRequest> {
        self.requests.iter().find(|r| r.id == request_id)
    }

    /// Requests addressed to the given alias.
    pub fn for_receiver<'a>(
        &'a self,
        alias: &'a str,
    ) -> impl Iterator<Item = &'a ConnectionRequest> {
        self.requests.iter().filter(move |r| r.receiver_alias == alias)
    }

    /// Requests a sender already raised on a story. The model allows
    /// duplicates; this exists so a presentation layer can gate them.
    pub fn between<'a>(
        &'a self,
        sender_alias: &'a str,
        story_id: &'a str,
    ) -> impl Iterator<Item = &'a ConnectionRequest> {
        self.requests
            .iter()
            .filter(move |r| r.sender_alias == sender_alias && r.story_id == story_id)
    }

    /// All requests in send order.
    pub fn requests(&self) -> &[ConnectionRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_preserves_other_fields() {
        let mut ledger = ConnectionLedger::new();
        let request = ConnectionRequest::new("Nora", "Kai", "story-1", "we should talk");
        let id = request.id.clone();
        ledger.send(request);

        assert!(ledger.settle(&id, ConnectionStatus::Connected));

        let settled = ledger.get(&id).unwrap();
        assert_eq!(settled.status, ConnectionStatus::Connected);
        assert_eq!(settled.sender_alias, "Nora");
        assert_eq!(settled.receiver_alias, "Kai");
        assert_eq!(settled.story_id, "story-1");
        assert_eq!(settled.initial_note, "we should talk");
    }

    #[test]
    fn test_settled_requests_are_terminal() {
        let mut ledger = ConnectionLedger::new();
        let request = ConnectionRequest::new("Nora", "Kai", "story-1", "hi");
        let id = request.id.clone();
        ledger.send(request);

        assert!(ledger.settle(&id, ConnectionStatus::Declined));
        assert!(!ledger.settle(&id, ConnectionStatus::Connected));
        assert_eq!(ledger.get(&id).unwrap().status, ConnectionStatus::Declined);
    }

    #[test]
    fn test_settle_missing_or_pending_target_is_noop() {
        let mut ledger = ConnectionLedger::new();
        let request = ConnectionRequest::new("Nora", "Kai", "story-1", "hi");
        let id = request.id.clone();
        ledger.send(request);

        assert!(!ledger.settle("missing", ConnectionStatus::Connected));
        assert!(!ledger.settle(&id, ConnectionStatus::Pending));
        assert_eq!(ledger.get(&id).unwrap().status, ConnectionStatus::Pending);
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let mut ledger = ConnectionLedger::new();
        ledger.send(ConnectionRequest::new("Nora", "Kai", "story-1", "first"));
        ledger.send(ConnectionRequest::new("Nora", "Kai", "story-1", "second"));

        assert_eq!(ledger.between("Nora", "story-1").count(), 2);
        assert_eq!(ledger.for_receiver("Kai").count(), 2);
    }
}
