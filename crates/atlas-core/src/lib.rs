//! Atlas core domain.
//!
//! The state model of a peer-support story-sharing application: identities,
//! stories with AI-generated emotional analysis, comment threads, mood
//! check-ins, peer-connection requests, and the session controller that
//! composes them. External collaborators (the analysis service and the
//! persisted key-value store) appear here only as ports; concrete adapters
//! live in `atlas-infrastructure`.

pub mod analysis;
pub mod config;
pub mod connection;
pub mod controller;
pub mod crisis;
pub mod error;
pub mod feed;
pub mod identity;
pub mod mood;
pub mod sanctuary;
pub mod state;
pub mod story;

// Re-export common error type
pub use error::AtlasError;

pub use controller::SessionController;
pub use state::{AppState, AppView};
