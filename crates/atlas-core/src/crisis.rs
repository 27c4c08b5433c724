//! Crisis notice contacts.
//!
//! The crisis signal itself is just `AppState::crisis_visible`; this module
//! holds the static hotline information the notice surfaces. Dismissing the
//! notice never alters story or analysis data.

/// A crisis support line offered by the notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotlineContact {
    pub name: &'static str,
    pub contact: &'static str,
    pub action: &'static str,
}

/// Support lines shown whenever the crisis notice is visible.
pub const CRISIS_HOTLINES: [HotlineContact; 2] = [
    HotlineContact {
        name: "Suicide & Crisis Lifeline",
        contact: "988",
        action: "Call or text 988",
    },
    HotlineContact {
        name: "Crisis Text Line",
        contact: "741741",
        action: "Text HOME to 741741",
    },
];
