//! Play/pause timing of a room as an explicit two-state machine.
//!
//! The live playhead is never stored. While paused it is the accumulated
//! base position; while playing it is the base plus the wall-clock time
//! elapsed since the run was anchored:
//!
//! ```text
//! live(now) = base + (playing ? (now - started_at) / 1000 : 0)
//! ```
//!
//! Resuming folds the accumulated base into the anchor
//! (`started_at = now - base`), so the elapsed term alone carries the whole
//! position and nothing is counted twice on the next pause.

use super::value_object::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transport {
    Paused {
        position_sec: f64,
    },
    Playing {
        base_position_sec: f64,
        started_at: Timestamp,
    },
}

impl Default for Transport {
    fn default() -> Self {
        Transport::Paused { position_sec: 0.0 }
    }
}

impl Transport {
    /// A fresh run from the start of the media.
    pub fn start_from_zero(now: Timestamp) -> Self {
        Transport::Playing {
            base_position_sec: 0.0,
            started_at: now,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Transport::Playing { .. })
    }

    /// Accumulated position as of the last pause (`playheadPositionSec`).
    pub fn playhead_position_sec(&self) -> f64 {
        match self {
            Transport::Paused { position_sec } => *position_sec,
            Transport::Playing {
                base_position_sec, ..
            } => *base_position_sec,
        }
    }

    /// Anchor of the current playing run (`startedAtMs`), `None` while paused.
    pub fn started_at(&self) -> Option<Timestamp> {
        match self {
            Transport::Paused { .. } => None,
            Transport::Playing { started_at, .. } => Some(*started_at),
        }
    }

    pub fn live_position(&self, now: Timestamp) -> f64 {
        match self {
            Transport::Paused { position_sec } => *position_sec,
            Transport::Playing {
                base_position_sec,
                started_at,
            } => base_position_sec + now.millis_since(*started_at) as f64 / 1000.0,
        }
    }

    pub fn play(self, now: Timestamp) -> Self {
        match self {
            Transport::Paused { position_sec } => Transport::Playing {
                base_position_sec: 0.0,
                started_at: now.minus_secs(position_sec),
            },
            playing @ Transport::Playing { .. } => playing,
        }
    }

    pub fn pause(self, now: Timestamp) -> Self {
        match self {
            Transport::Playing { .. } => Transport::Paused {
                position_sec: self.live_position(now),
            },
            paused @ Transport::Paused { .. } => paused,
        }
    }

    /// Drive the machine towards `playing`. Returns `false` when it was
    /// already in the requested state, leaving timing untouched.
    pub fn set_playing(&mut self, playing: bool, now: Timestamp) -> bool {
        if self.is_playing() == playing {
            return false;
        }
        *self = if playing {
            self.play(now)
        } else {
            self.pause(now)
        };
        true
    }
}
