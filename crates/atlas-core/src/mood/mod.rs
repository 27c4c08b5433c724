//! Mood check-in domain module.
//!
//! - `model`: the `MoodEntry` entity, `MoodLog` history, and mood palette
//! - `repository`: persistence trait for the mood history snapshot

mod model;
mod repository;

pub use model::{MOOD_KINDS, MoodEntry, MoodKind, MoodLog};
pub use repository::MoodRepository;
