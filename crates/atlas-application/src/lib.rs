//! Application layer for Atlas.
//!
//! Assembles the domain core and the infrastructure adapters into a running
//! application: bootstrap wiring, telemetry initialization, and the starter
//! feed content.

pub mod bootstrap;
pub mod seed;
pub mod telemetry;

pub use bootstrap::AtlasApp;
pub use telemetry::init_tracing;
