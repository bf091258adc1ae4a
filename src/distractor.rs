//! # Distractor Synthesizer
//!
//! Derives the three near-miss phrases presented alongside the canonical
//! one. Each distractor is one small, musically plausible transformation of
//! the canonical phrase:
//!
//! - **Melodic nudge** - one random note moves to a scale-adjacent pitch
//! - **Rhythmic split** - the first half note becomes two quarters, or
//!   failing that the first quarter becomes two eighths
//! - **Adjacent swap** - two neighboring events in the first multi-event
//!   measure trade places
//!
//! A transformation whose structural precondition fails (nothing to split,
//! nothing to swap) degrades to an unmodified copy rather than erroring.
//! The uniqueness pass at the end is the safety net: any variant that still
//! matches the canonical phrase, or an earlier variant, gets its first note
//! nudged until all four presented options are pairwise distinct under
//! [`sequences_equal`].
//!
//! The canonical phrase is taken by shared reference and never mutated;
//! every variant starts from its own clone.

use crate::phrase::{sequences_equal, Event, Phrase};
use crate::random::RandomSource;
use crate::theory::Pitch;

/// Derive three distractor phrases from the canonical one.
///
/// The result is guaranteed pairwise distinct and distinct from
/// `canonical` under [`sequences_equal`].
pub fn make_distractors<R: RandomSource + ?Sized>(
    canonical: &Phrase,
    rng: &mut R,
) -> [Phrase; 3] {
    let mut variants = [
        nudge_melody(canonical, rng),
        split_rhythm(canonical),
        swap_adjacent(canonical, rng),
    ];

    // Uniqueness enforcement: each variant in turn is compared against the
    // canonical phrase and every earlier variant, and the later member of
    // an equal pair is repaired. A repair nudge can itself land on a taken
    // pitch (a one-note phrase only has neighbors to move between), so the
    // repair repeats until the collision clears. The attempt bound only
    // matters for phrases with no notes, which cannot be repaired at all.
    for j in 0..variants.len() {
        let (earlier, rest) = variants.split_at_mut(j);
        let variant = &mut rest[0];
        let mut attempts = 0;
        while attempts < REPAIR_ATTEMPTS
            && (sequences_equal(variant, canonical)
                || earlier.iter().any(|v| sequences_equal(v, variant)))
        {
            if !repair(variant, rng) {
                break;
            }
            attempts += 1;
        }
    }

    variants
}

const REPAIR_ATTEMPTS: usize = 64;

/// Replace `pitch` with a uniformly-chosen scale neighbor. Boundary pitches
/// have a single neighbor, which is then the only possible result.
fn nudge_pitch<R: RandomSource + ?Sized>(pitch: Pitch, rng: &mut R) -> Pitch {
    let neighbors = pitch.neighbors();
    neighbors[rng.index(neighbors.len())]
}

/// Melodic nudge: move one random note to an adjacent scale pitch.
/// Rhythm is untouched. A phrase with no notes is returned unchanged.
fn nudge_melody<R: RandomSource + ?Sized>(canonical: &Phrase, rng: &mut R) -> Phrase {
    let mut phrase = canonical.clone();

    let note_positions: Vec<(usize, usize)> = phrase
        .measures
        .iter()
        .enumerate()
        .flat_map(|(m, measure)| {
            measure
                .events
                .iter()
                .enumerate()
                .filter(|(_, e)| !e.is_rest())
                .map(move |(e, _)| (m, e))
        })
        .collect();

    if note_positions.is_empty() {
        return phrase;
    }

    let (m, e) = note_positions[rng.index(note_positions.len())];
    if let Event::Note { pitch, .. } = &mut phrase.measures[m].events[e] {
        *pitch = nudge_pitch(*pitch, rng);
    }
    phrase
}

/// Rhythmic split: the first event worth 2 or 1 beats is replaced by two
/// consecutive events of half its length, same kind and pitch. At most one
/// split; no qualifying event means an unmodified copy.
fn split_rhythm(canonical: &Phrase) -> Phrase {
    let mut phrase = canonical.clone();

    for measure in &mut phrase.measures {
        for i in 0..measure.events.len() {
            let beats = measure.events[i].beats();
            let half = if beats == 2.0 {
                1.0
            } else if beats == 1.0 {
                0.5
            } else {
                continue;
            };

            let replacement = match &measure.events[i] {
                Event::Note { pitch, .. } => Event::Note {
                    pitch: *pitch,
                    beats: half,
                },
                Event::Rest { .. } => Event::Rest { beats: half },
            };
            measure.events[i] = replacement.clone();
            measure.events.insert(i + 1, replacement);
            return phrase;
        }
    }
    phrase
}

/// Adjacent swap: in the first measure holding at least two events, swap a
/// uniformly-random adjacent pair. No such measure means an unmodified copy.
fn swap_adjacent<R: RandomSource + ?Sized>(canonical: &Phrase, rng: &mut R) -> Phrase {
    let mut phrase = canonical.clone();

    if let Some(measure) = phrase.measures.iter_mut().find(|m| m.events.len() >= 2) {
        let i = rng.index(measure.events.len() - 1);
        measure.events.swap(i, i + 1);
    }
    phrase
}

/// Repair a variant that collided with another option: nudge the pitch of
/// the first note, scanning measures and events in order. Returns false if
/// the phrase has no notes to repair (unreachable via the generator, which
/// never emits an all-rest measure).
fn repair<R: RandomSource + ?Sized>(phrase: &mut Phrase, rng: &mut R) -> bool {
    for measure in &mut phrase.measures {
        for event in &mut measure.events {
            if let Event::Note { pitch, .. } = event {
                *pitch = nudge_pitch(*pitch, rng);
                return true;
            }
        }
    }
    false
}
