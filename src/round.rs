//! # Round Assembly
//!
//! Ties the generator and the distractor synthesizer together into the
//! shape the game loop consumes: four shuffled options, one of them the
//! canonical phrase that actually gets played.
//!
//! A [`Round`] is ephemeral; nothing about it outlives the user's answer.
//! The only session-scoped state is the [`Scoreboard`], which the UI layer
//! owns and feeds one answer at a time.

use crate::distractor::make_distractors;
use crate::generator::generate_sequence;
use crate::phrase::Phrase;
use crate::random::RandomSource;
use serde::Serialize;

/// A phrase as presented to the user, tagged with whether it is the one
/// being played.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOption {
    pub phrase: Phrase,
    pub is_canonical: bool,
}

/// One question: four options in shuffled presentation order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub options: Vec<RoundOption>,
    /// Position of the canonical option within `options`.
    pub answer_index: usize,
}

impl Round {
    /// The phrase the audio layer should play.
    pub fn canonical(&self) -> &Phrase {
        &self.options[self.answer_index].phrase
    }
}

/// Build a fresh round: generate the canonical phrase, derive three
/// distractors, and shuffle the four into presentation order.
///
/// `bar_count` must be 1 or 2 (the two game modes); [`GameConfig`]
/// validation upholds this for config-driven callers. An empty phrase has
/// no distinct distractors, so a zero bar count is rejected in debug builds.
///
/// [`GameConfig`]: crate::config::GameConfig
pub fn new_round<R: RandomSource + ?Sized>(rng: &mut R, bar_count: usize) -> Round {
    debug_assert!(
        (1..=2).contains(&bar_count),
        "bar_count must be 1 or 2, got {}",
        bar_count
    );
    let canonical = generate_sequence(rng, bar_count);
    let distractors = make_distractors(&canonical, rng);

    let mut options: Vec<RoundOption> = Vec::with_capacity(4);
    options.push(RoundOption {
        phrase: canonical,
        is_canonical: true,
    });
    options.extend(distractors.into_iter().map(|phrase| RoundOption {
        phrase,
        is_canonical: false,
    }));

    // Fisher-Yates, high index down
    for i in (1..options.len()).rev() {
        let j = rng.index(i + 1);
        options.swap(i, j);
    }

    let answer_index = options
        .iter()
        .position(|o| o.is_canonical)
        .unwrap_or_default();

    Round {
        options,
        answer_index,
    }
}

/// Session counters for the score HUD. Streak resets on a miss.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    pub correct: u32,
    pub total: u32,
    pub streak: u32,
}

impl Scoreboard {
    /// Record one answered round.
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
    }
}
