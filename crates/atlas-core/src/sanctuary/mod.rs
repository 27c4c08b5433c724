//! Sanctuary ambient-audio domain module.

mod model;

pub use model::{AudioTrack, PlayerState, SANCTUARY_TRACKS, TrackCategory, find_track};
