//! # earshot
//!
//! Core logic for an ear-training game: a short phrase is played, and the
//! player picks the matching notation among four choices, one correct and
//! three near-miss distractors.
//!
//! ## Pipeline
//! ```text
//! generate_sequence -> make_distractors -> new_round
//!        |                    |                |
//!   random measures     3 close variants   shuffled options
//! ```
//!
//! The core is stateless and side-effect free: all randomness flows through
//! the [`RandomSource`] abstraction, and the UI/audio layers consume the
//! results via the [`playback_data`] and [`notation_data`] adapters.
//!
//! ## Example
//! ```rust
//! use earshot::{new_round, notation_data, playback_data};
//!
//! let mut rng = rand::rng();
//! let round = new_round(&mut rng, 1);
//!
//! assert_eq!(round.options.len(), 4);
//! let audio = playback_data(round.canonical(), 120).unwrap();
//! assert!(!audio.notes.is_empty());
//! let glyphs = notation_data(&round.options[0].phrase).unwrap();
//! assert_eq!(glyphs.len(), 1); // one row per measure
//! ```

pub mod config;
pub mod distractor;
pub mod error;
pub mod generator;
pub mod notation;
pub mod phrase;
pub mod playback;
pub mod random;
pub mod round;
pub mod theory;

pub use config::{parse_config, GameConfig};
pub use distractor::make_distractors;
pub use error::EarshotError;
pub use generator::{generate_measure, generate_sequence};
pub use notation::{notation_data, Glyph, GlyphKind};
pub use phrase::{sequences_equal, Event, Measure, Phrase};
pub use playback::{playback_data, PlaybackData, PlaybackNote};
pub use random::{choice_weighted, RandomSource, ScriptedSource};
pub use round::{new_round, Round, RoundOption, Scoreboard};
pub use theory::{Duration, Pitch, MEASURE_BEATS, SCALE};
