//! Storage primitives for the persisted snapshots.

mod atomic_json;

pub use atomic_json::AtomicJsonFile;
