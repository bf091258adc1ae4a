//! # Music Theory Primitives
//!
//! This module defines the fixed pitch and duration vocabularies the game
//! draws from.
//!
//! ## Pitch System
//! - One diatonic octave, C4 through C5 (8 steps, no accidentals)
//! - Everything is in C major on a treble clef; there is no key signature
//! - [`SCALE`] gives the canonical low-to-high ordering, which is what
//!   "scale-adjacent" means throughout the crate: the pitch one index up or
//!   down in [`SCALE`]
//!
//! ## Duration System
//! - Four named values: whole (4 beats), half (2), quarter (1), eighth (0.5)
//! - The meter is fixed at 4/4, so a whole note always fills a measure
//! - [`Duration::from_beats`] is the only fallible conversion in the crate:
//!   it rejects any beat count outside the vocabulary
//!
//! ## Related Modules
//! - `phrase` - Events carry a `Pitch` and a raw beat count
//! - `generator` - Picks durations and pitches from these vocabularies
//! - `playback` / `notation` - Convert beat counts back through `Duration`

use crate::error::EarshotError;
use serde::Serialize;

/// The fixed scale, low to high. Index order defines pitch adjacency.
pub const SCALE: [Pitch; 8] = [
    Pitch::C4,
    Pitch::D4,
    Pitch::E4,
    Pitch::F4,
    Pitch::G4,
    Pitch::A4,
    Pitch::B4,
    Pitch::C5,
];

/// Number of beats in a measure (fixed 4/4 meter).
pub const MEASURE_BEATS: f64 = 4.0;

/// A pitch from the fixed C4..C5 diatonic scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Pitch {
    C4,
    D4,
    E4,
    F4,
    G4,
    A4,
    B4,
    C5,
}

impl Pitch {
    /// Position of this pitch in [`SCALE`] (0 = C4, 7 = C5)
    pub fn scale_index(&self) -> usize {
        match self {
            Pitch::C4 => 0,
            Pitch::D4 => 1,
            Pitch::E4 => 2,
            Pitch::F4 => 3,
            Pitch::G4 => 4,
            Pitch::A4 => 5,
            Pitch::B4 => 6,
            Pitch::C5 => 7,
        }
    }

    /// Display label, step letter plus octave number (e.g. "C4")
    pub fn label(&self) -> &'static str {
        match self {
            Pitch::C4 => "C4",
            Pitch::D4 => "D4",
            Pitch::E4 => "E4",
            Pitch::F4 => "F4",
            Pitch::G4 => "G4",
            Pitch::A4 => "A4",
            Pitch::B4 => "B4",
            Pitch::C5 => "C5",
        }
    }

    /// MIDI note number (C4 = 60, middle C)
    pub fn to_midi_note(&self) -> u8 {
        match self {
            Pitch::C4 => 60,
            Pitch::D4 => 62,
            Pitch::E4 => 64,
            Pitch::F4 => 65,
            Pitch::G4 => 67,
            Pitch::A4 => 69,
            Pitch::B4 => 71,
            Pitch::C5 => 72,
        }
    }

    /// Scale-adjacent pitches, in low-to-high order.
    ///
    /// Interior pitches have two neighbors; the scale boundaries (C4, C5)
    /// have exactly one. Never empty.
    pub fn neighbors(&self) -> Vec<Pitch> {
        let idx = self.scale_index();
        let mut out = Vec::with_capacity(2);
        if idx > 0 {
            out.push(SCALE[idx - 1]);
        }
        if idx + 1 < SCALE.len() {
            out.push(SCALE[idx + 1]);
        }
        out
    }
}

/// Note duration from the fixed four-value vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    Whole,
    Half,
    Quarter,
    Eighth,
}

impl Duration {
    /// Duration in beats under the fixed 4/4 meter
    pub fn as_beats(&self) -> f64 {
        match self {
            Duration::Whole => 4.0,
            Duration::Half => 2.0,
            Duration::Quarter => 1.0,
            Duration::Eighth => 0.5,
        }
    }

    /// Glyph/type name used by the rendering layer ("whole", "half", ...)
    pub fn name(&self) -> &'static str {
        match self {
            Duration::Whole => "whole",
            Duration::Half => "half",
            Duration::Quarter => "quarter",
            Duration::Eighth => "eighth",
        }
    }

    /// Recover the vocabulary entry for a raw beat count.
    ///
    /// The generator only ever emits vocabulary beat values, so this fails
    /// only on caller-built malformed events.
    ///
    /// # Errors
    /// Returns [`EarshotError::UnsupportedDuration`] if `beats` is not one
    /// of 4, 2, 1, 0.5.
    pub fn from_beats(beats: f64) -> Result<Duration, EarshotError> {
        if beats == 4.0 {
            Ok(Duration::Whole)
        } else if beats == 2.0 {
            Ok(Duration::Half)
        } else if beats == 1.0 {
            Ok(Duration::Quarter)
        } else if beats == 0.5 {
            Ok(Duration::Eighth)
        } else {
            Err(EarshotError::UnsupportedDuration { beats })
        }
    }
}
