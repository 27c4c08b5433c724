//! Connection request ("bridge") domain module.
//!
//! - `model`: the `ConnectionRequest` entity and its status lifecycle
//! - `ledger`: the `ConnectionLedger` aggregate

mod ledger;
mod model;

pub use ledger::ConnectionLedger;
pub use model::{ConnectionRequest, ConnectionStatus};
