//! # Phrase Data Model
//!
//! This module defines the musical content types shared by the generator,
//! the distractor synthesizer, and the rendering/playback adapters.
//!
//! ## Type Hierarchy
//! ```text
//! Phrase
//!   └── Vec<Measure> (1 or 2, fixed per game session)
//!         └── Vec<Event> (Note | Rest)
//!               ├── beats: f64 (vocabulary values 4, 2, 1, 0.5)
//!               └── pitch: Pitch (notes only)
//! ```
//!
//! ## Invariants
//! - Every generated measure's beats sum to exactly 4 (the 4/4 capacity)
//! - Generated measures never start with a rest and never place two rests
//!   back to back
//!
//! Events store a raw beat count rather than a `Duration` so that an
//! adapter can reject a malformed caller-built event explicitly instead of
//! making the type unrepresentable and panicking downstream.
//!
//! ## Equality
//! [`sequences_equal`] compares the flattened event sequences of two
//! phrases: position by position, same kind, same beats, same pitch. Bar
//! lines are discarded before comparison, so re-barred but otherwise
//! identical content compares equal.

use crate::theory::Pitch;
use serde::Serialize;

/// An atomic musical unit: a pitched note or a silent rest
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Event {
    Note { pitch: Pitch, beats: f64 },
    Rest { beats: f64 },
}

impl Event {
    /// Duration of this event in beats
    pub fn beats(&self) -> f64 {
        match self {
            Event::Note { beats, .. } => *beats,
            Event::Rest { beats } => *beats,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Event::Rest { .. })
    }

    /// The pitch if this is a note
    pub fn pitch(&self) -> Option<Pitch> {
        match self {
            Event::Note { pitch, .. } => Some(*pitch),
            Event::Rest { .. } => None,
        }
    }
}

/// A beat-complete grouping of events under the fixed 4-beat meter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measure {
    pub events: Vec<Event>,
}

impl Measure {
    /// Total duration of the measure in beats
    pub fn total_beats(&self) -> f64 {
        self.events.iter().map(Event::beats).sum()
    }
}

/// One round's musical content: 1 or 2 measures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phrase {
    pub measures: Vec<Measure>,
}

impl Phrase {
    /// Iterate events across all measures in order, ignoring bar lines
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.measures.iter().flat_map(|m| m.events.iter())
    }

    /// Count of note (non-rest) events across the phrase
    pub fn note_count(&self) -> usize {
        self.events().filter(|e| !e.is_rest()).count()
    }
}

/// Compare two phrases by their flattened event sequences.
///
/// Equal iff same event count and, position by position, same kind, same
/// beats, and (for notes) same pitch. Measure boundaries are ignored.
pub fn sequences_equal(a: &Phrase, b: &Phrase) -> bool {
    let mut lhs = a.events();
    let mut rhs = b.events();
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x == y => {}
            _ => return false,
        }
    }
}
