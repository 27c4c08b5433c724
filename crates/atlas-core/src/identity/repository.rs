//! Identity repository trait.
//!
//! Defines the interface for identity persistence operations.

use super::model::Identity;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the persisted identity snapshot.
///
/// The identity occupies a single logical key in the backing store and is
/// always written wholesale, never merged. Implementations must treat
/// malformed stored data as absent rather than failing the load.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Loads the persisted identity, if any.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Identity))`: a valid snapshot was found
    /// - `Ok(None)`: nothing persisted, or the snapshot was unreadable
    /// - `Err(_)`: the store itself could not be accessed
    async fn load(&self) -> Result<Option<Identity>>;

    /// Overwrites the persisted identity snapshot.
    async fn save(&self, identity: &Identity) -> Result<()>;

    /// Removes the persisted identity snapshot.
    ///
    /// Clearing an already-absent snapshot is not an error.
    async fn clear(&self) -> Result<()>;
}
