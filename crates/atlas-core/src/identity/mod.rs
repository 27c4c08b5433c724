//! Identity domain module.
//!
//! - `model`: the `Identity` entity and `IdentityPatch` partial update
//! - `repository`: persistence trait for the identity snapshot

mod model;
mod repository;

pub use model::{Identity, IdentityPatch};
pub use repository::IdentityRepository;
