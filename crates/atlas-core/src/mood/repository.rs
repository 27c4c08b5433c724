//! Mood repository trait.
//!
//! Defines the interface for mood history persistence.

use super::model::MoodEntry;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the persisted mood history.
///
/// The history occupies a single logical key and is overwritten wholesale
/// after every change. Implementations must treat malformed stored data as
/// an empty history rather than failing the load.
#[async_trait]
pub trait MoodRepository: Send + Sync {
    /// Loads the persisted mood history (newest first).
    ///
    /// Returns an empty list when nothing is persisted or the snapshot was
    /// unreadable.
    async fn load(&self) -> Result<Vec<MoodEntry>>;

    /// Overwrites the persisted history snapshot.
    async fn save(&self, entries: &[MoodEntry]) -> Result<()>;

    /// Removes the persisted history snapshot.
    async fn clear(&self) -> Result<()>;
}
