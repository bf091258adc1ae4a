//! # Notation Adapter
//!
//! Converts a phrase into the drawable glyph data the rendering layer
//! consumes: per measure, a list of glyph specs naming the symbol
//! ("quarter", "half", ...), whether it is a note or a rest, and the pitch
//! label for notes. Clef is fixed treble and meter fixed 4/4, so neither is
//! part of the payload.
//!
//! Like the playback adapter, this is a boundary where malformed
//! caller-built events are rejected with
//! [`EarshotError::UnsupportedDuration`].

use crate::error::EarshotError;
use crate::phrase::{Event, Phrase};
use crate::theory::Duration;
use serde::Serialize;

/// Kind discriminator for a drawable glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphKind {
    Note,
    Rest,
}

/// One drawable symbol on the staff.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Glyph {
    pub kind: GlyphKind,
    /// Duration name: "whole", "half", "quarter", or "eighth".
    pub value: &'static str,
    /// Pitch label for notes ("C4".."C5"), absent for rests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<&'static str>,
}

/// Map a phrase to glyph rows, one row per measure.
///
/// # Errors
/// Returns [`EarshotError::UnsupportedDuration`] if any event carries a
/// beat count outside the fixed vocabulary.
pub fn notation_data(phrase: &Phrase) -> Result<Vec<Vec<Glyph>>, EarshotError> {
    phrase
        .measures
        .iter()
        .map(|measure| {
            measure
                .events
                .iter()
                .map(|event| {
                    let value = Duration::from_beats(event.beats())?.name();
                    Ok(match event {
                        Event::Note { pitch, .. } => Glyph {
                            kind: GlyphKind::Note,
                            value,
                            pitch: Some(pitch.label()),
                        },
                        Event::Rest { .. } => Glyph {
                            kind: GlyphKind::Rest,
                            value,
                            pitch: None,
                        },
                    })
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrase::Measure;
    use crate::theory::Pitch;

    #[test]
    fn test_glyph_rows_follow_measures() {
        let phrase = Phrase {
            measures: vec![
                Measure {
                    events: vec![
                        Event::Note {
                            pitch: Pitch::E4,
                            beats: 2.0,
                        },
                        Event::Rest { beats: 1.0 },
                        Event::Note {
                            pitch: Pitch::F4,
                            beats: 1.0,
                        },
                    ],
                },
                Measure {
                    events: vec![Event::Note {
                        pitch: Pitch::C5,
                        beats: 4.0,
                    }],
                },
            ],
        };

        let rows = notation_data(&phrase).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            vec![
                Glyph {
                    kind: GlyphKind::Note,
                    value: "half",
                    pitch: Some("E4")
                },
                Glyph {
                    kind: GlyphKind::Rest,
                    value: "quarter",
                    pitch: None
                },
                Glyph {
                    kind: GlyphKind::Note,
                    value: "quarter",
                    pitch: Some("F4")
                },
            ]
        );
        assert_eq!(rows[1][0].value, "whole");
        assert_eq!(rows[1][0].pitch, Some("C5"));
    }

    #[test]
    fn test_malformed_beats_rejected() {
        let phrase = Phrase {
            measures: vec![Measure {
                events: vec![Event::Rest { beats: 1.5 }],
            }],
        };
        assert!(matches!(
            notation_data(&phrase),
            Err(EarshotError::UnsupportedDuration { .. })
        ));
    }

    #[test]
    fn test_rest_glyph_omits_pitch_in_json() {
        let phrase = Phrase {
            measures: vec![Measure {
                events: vec![Event::Rest { beats: 0.5 }],
            }],
        };
        let json = serde_json::to_string(&notation_data(&phrase).unwrap()).unwrap();
        assert_eq!(json, r#"[[{"kind":"rest","value":"eighth"}]]"#);
    }
}
