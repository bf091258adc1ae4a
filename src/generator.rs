//! # Phrase Generator
//!
//! Produces random rhythmically-valid measures under the fixed 4/4 meter.
//!
//! ## Algorithm
//! `generate_measure` greedily fills the 4-beat capacity:
//! 1. Restrict the duration vocabulary to values that still fit
//! 2. Weighted pick among the allowed durations (whole notes and eighth
//!    notes are discouraged relative to quarters and halves)
//! 3. Weighted note-vs-rest pick (75% note / 25% rest)
//! 4. Apply the ordered note-override rules (`NOTE_OVERRIDES`)
//! 5. Notes get a pitch drawn uniformly from the fixed scale
//! 6. Append and subtract; every iteration consumes at least half a beat,
//!    so the loop always terminates with an exact 4-beat measure
//!
//! ## Override Policy
//! The rest-placement policy is an explicit ordered rule list rather than
//! nested conditionals so each rule can be read and tested on its own:
//! - the first event of a measure is always a note
//! - the event that completes the measure is always a note
//! - a rest is never followed by another rest
//!
//! ## Randomness
//! All draws go through [`RandomSource`], three per event in a fixed order:
//! duration roll, kind roll, then (for notes) pitch index. Tests rely on
//! that order to script exact measures.

use crate::phrase::{Event, Measure, Phrase};
use crate::random::{choice_weighted, RandomSource};
use crate::theory::{Duration, MEASURE_BEATS, SCALE};

/// Relative selection weights per duration. Quarters and halves dominate;
/// whole notes and eighths stay occasional.
const DURATION_WEIGHTS: [(Duration, u32); 4] = [
    (Duration::Whole, 1),
    (Duration::Half, 3),
    (Duration::Quarter, 3),
    (Duration::Eighth, 2),
];

/// Note-vs-rest split: 3:1, i.e. 75% notes.
const KIND_WEIGHTS: [(bool, u32); 2] = [(true, 3), (false, 1)];

/// Tolerance for beat arithmetic on f64 (vocabulary values are exact in
/// binary, but comparisons stay tolerant anyway).
const BEAT_EPSILON: f64 = 1e-9;

/// What the policy rules can see about the slot being filled.
struct SlotContext {
    /// No events placed in this measure yet
    is_first: bool,
    /// The chosen duration exactly consumes the remaining capacity
    fills_measure: bool,
    /// The previous event in this measure is a rest
    prev_was_rest: bool,
}

/// A single predicate in the rest-placement policy: when it applies, the
/// event is forced to be a note regardless of the kind roll. The name is
/// what trace logs and policy tests refer to.
struct NoteOverride {
    name: &'static str,
    applies: fn(&SlotContext) -> bool,
}

/// Names of the override rules that would force a note into this slot, in
/// policy order. Empty when the kind roll stands.
fn forced_note_reasons(ctx: &SlotContext) -> Vec<&'static str> {
    NOTE_OVERRIDES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| rule.name)
        .collect()
}

/// Ordered policy: rules are checked in sequence, any match forces a note.
const NOTE_OVERRIDES: [NoteOverride; 3] = [
    NoteOverride {
        name: "a measure never opens with a rest",
        applies: |ctx| ctx.is_first,
    },
    NoteOverride {
        name: "a measure never closes with a rest",
        applies: |ctx| ctx.fills_measure,
    },
    NoteOverride {
        name: "rests never appear back to back",
        applies: |ctx| ctx.prev_was_rest,
    },
];

/// Generate one random measure summing to exactly 4 beats.
pub fn generate_measure<R: RandomSource + ?Sized>(rng: &mut R) -> Measure {
    let mut events: Vec<Event> = Vec::new();
    let mut remaining = MEASURE_BEATS;

    while remaining > BEAT_EPSILON {
        let allowed: Vec<(Duration, u32)> = DURATION_WEIGHTS
            .iter()
            .filter(|(d, _)| d.as_beats() <= remaining + BEAT_EPSILON)
            .copied()
            .collect();

        let duration = *choice_weighted(rng, &allowed);
        let beats = duration.as_beats();
        let wants_note = *choice_weighted(rng, &KIND_WEIGHTS);

        let ctx = SlotContext {
            is_first: events.is_empty(),
            fills_measure: (remaining - beats).abs() < BEAT_EPSILON,
            prev_was_rest: events.last().map(Event::is_rest).unwrap_or(false),
        };
        let is_note = wants_note || !forced_note_reasons(&ctx).is_empty();

        if is_note {
            let pitch = SCALE[rng.index(SCALE.len())];
            events.push(Event::Note { pitch, beats });
        } else {
            events.push(Event::Rest { beats });
        }
        remaining -= beats;
    }

    Measure { events }
}

/// Generate a phrase of `bar_count` independent measures.
pub fn generate_sequence<R: RandomSource + ?Sized>(rng: &mut R, bar_count: usize) -> Phrase {
    let measures = (0..bar_count).map(|_| generate_measure(rng)).collect();
    Phrase { measures }
}
