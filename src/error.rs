//! # Error Types
//!
//! This module defines all error types for the earshot core.
//!
//! The generation and distractor pipeline is total: it always succeeds on
//! well-formed input, so errors only surface at the edges, converting
//! caller-built events for rendering/playback and parsing session config.
//!
//! ## Error Types
//! - `UnsupportedDuration` - a beat count outside the fixed duration vocabulary
//! - `Config` - invalid session configuration (YAML)

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EarshotError {
    /// A beat count that has no entry in the duration vocabulary.
    ///
    /// Can only occur for events constructed outside the generator, which
    /// itself only emits vocabulary values (4, 2, 1, 0.5).
    ///
    /// # Example
    /// ```
    /// # use earshot::EarshotError;
    /// let err = EarshotError::UnsupportedDuration { beats: 0.75 };
    /// assert_eq!(err.to_string(), "Unsupported duration: 0.75 beats is not a whole, half, quarter, or eighth");
    /// ```
    #[error("Unsupported duration: {beats} beats is not a whole, half, quarter, or eighth")]
    UnsupportedDuration { beats: f64 },

    /// Invalid session configuration.
    ///
    /// Occurs when the YAML config fails to parse or contains out-of-range
    /// values (e.g. a bar count other than 1 or 2).
    ///
    /// # Example
    /// ```
    /// # use earshot::EarshotError;
    /// let err = EarshotError::Config("bars must be 1 or 2".to_string());
    /// assert_eq!(err.to_string(), "Invalid config: bars must be 1 or 2");
    /// ```
    #[error("Invalid config: {0}")]
    Config(String),
}
