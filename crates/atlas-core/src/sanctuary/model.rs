//! Sanctuary ambient-audio domain models.
//!
//! Playback itself is an external concern; this module only tracks which
//! track is active, the volume, and the remaining listening time. The
//! countdown is driven by the caller invoking [`PlayerState::tick`] once a
//! second.

use serde::{Deserialize, Serialize};

/// Category of an ambient track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackCategory {
    Nature,
    Ambient,
    #[serde(rename = "ASMR")]
    Asmr,
    Guided,
}

/// A built-in ambient track. URLs are static placeholders, not streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioTrack {
    pub id: &'static str,
    pub title: &'static str,
    pub category: TrackCategory,
    pub emoji: &'static str,
    pub url: &'static str,
}

/// The built-in sanctuary catalog, in display order.
pub const SANCTUARY_TRACKS: [AudioTrack; 7] = [
    AudioTrack {
        id: "n1",
        title: "Rain on Leaves",
        category: TrackCategory::Nature,
        emoji: "\u{1F327}\u{FE0F}",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
    },
    AudioTrack {
        id: "n2",
        title: "Mountain Wind",
        category: TrackCategory::Nature,
        emoji: "\u{1F3D4}\u{FE0F}",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
    },
    AudioTrack {
        id: "a1",
        title: "Deep Space Drift",
        category: TrackCategory::Ambient,
        emoji: "\u{1FA90}",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3",
    },
    AudioTrack {
        id: "a2",
        title: "Zen Garden",
        category: TrackCategory::Ambient,
        emoji: "\u{1F38D}",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-4.mp3",
    },
    AudioTrack {
        id: "as1",
        title: "Soft Whispers",
        category: TrackCategory::Asmr,
        emoji: "\u{1F399}\u{FE0F}",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-5.mp3",
    },
    AudioTrack {
        id: "as2",
        title: "Crinkling Sounds",
        category: TrackCategory::Asmr,
        emoji: "\u{1F4C4}",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-7.mp3",
    },
    AudioTrack {
        id: "g1",
        title: "2-Min Grounding",
        category: TrackCategory::Guided,
        emoji: "\u{1F9D8}",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-6.mp3",
    },
];

/// Looks up a built-in track by id.
pub fn find_track(track_id: &str) -> Option<&'static AudioTrack> {
    SANCTUARY_TRACKS.iter().find(|t| t.id == track_id)
}

/// Ambient-audio playback state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Id of the active track, if any
    pub track_id: Option<String>,
    pub is_playing: bool,
    /// Volume in `0.0..=1.0`
    pub volume: f32,
    /// Remaining listening time in seconds, while a session is active
    pub time_left_secs: Option<u32>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            track_id: None,
            is_playing: false,
            volume: 0.5,
            time_left_secs: None,
        }
    }
}

impl PlayerState {
    /// Starts a listening session on a track for the given duration.
    pub fn start(&mut self, track_id: impl Into<String>, duration_mins: u32) {
        self.track_id = Some(track_id.into());
        self.time_left_secs = Some(duration_mins * 60);
        self.is_playing = true;
    }

    /// Ends the session entirely.
    pub fn stop(&mut self) {
        self.track_id = None;
        self.is_playing = false;
        self.time_left_secs = None;
    }

    /// Pauses or resumes without resetting the countdown.
    pub fn toggle_play(&mut self) {
        if self.track_id.is_some() {
            self.is_playing = !self.is_playing;
        }
    }

    /// Sets the volume, clamped to `0.0..=1.0`.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Advances the countdown by one second while playing.
    ///
    /// Reaching zero stops the session. Returns `true` while a session is
    /// still active afterwards.
    pub fn tick(&mut self) -> bool {
        if let (true, Some(left)) = (self.is_playing, self.time_left_secs) {
            if left <= 1 {
                self.stop();
            } else {
                self.time_left_secs = Some(left - 1);
            }
        }
        self.track_id.is_some()
    }
}
