//! # Playback Adapter
//!
//! Converts a phrase into the flat, timed note list the audio layer plays.
//!
//! The audio layer is sample-based: each note maps to one sample lookup at
//! a MIDI pitch, scheduled at `start_time` beats and held for `duration`
//! beats. Rests produce no entry; they only advance the clock. Serialized
//! field names are camelCase for the JS-facing scheduler.
//!
//! This is one of the two places a malformed caller-built event surfaces:
//! a beat count outside the duration vocabulary is rejected with
//! [`EarshotError::UnsupportedDuration`] instead of being scheduled.

use crate::error::EarshotError;
use crate::phrase::{Event, Phrase};
use crate::theory::Duration;
use serde::Serialize;

/// One schedulable note.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackNote {
    pub midi_note: u8,
    /// Offset from the start of the phrase, in beats.
    pub start_time: f64,
    /// Length in beats.
    pub duration: f64,
}

/// Playback data for a whole phrase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackData {
    pub tempo: u16,
    pub notes: Vec<PlaybackNote>,
}

/// Flatten a phrase into timed notes.
///
/// # Errors
/// Returns [`EarshotError::UnsupportedDuration`] if any event carries a
/// beat count outside the fixed vocabulary.
pub fn playback_data(phrase: &Phrase, tempo: u16) -> Result<PlaybackData, EarshotError> {
    let mut notes = Vec::new();
    let mut clock = 0.0;

    for event in phrase.events() {
        // Validate the beat count even for rests; a malformed rest would
        // silently skew every later start time.
        let beats = Duration::from_beats(event.beats())?.as_beats();

        if let Event::Note { pitch, .. } = event {
            notes.push(PlaybackNote {
                midi_note: pitch.to_midi_note(),
                start_time: clock,
                duration: beats,
            });
        }
        clock += beats;
    }

    Ok(PlaybackData { tempo, notes })
}
