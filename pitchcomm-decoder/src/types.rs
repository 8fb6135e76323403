//! Core types for the PitchComm decoder library
//!
//! This module defines the PitchSignal record exchanged over the LoRa link and
//! the error type shared by the codec and the configuration checker. Decoding
//! is stateless: every call produces a fresh value and nothing is retained.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Size of a PitchSignal packet on the wire
pub const SIGNAL_SIZE: usize = 7;

/// A single PitchSignal packet as sent by the transmitter
///
/// Field codes are kept as raw integers. Values outside the named tables are
/// legitimate on this link and render as `Unknown (<code>)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchSignal {
    /// Signal category (0 = pitch, 1 = reset)
    pub signal_type: u8,
    /// Pitch call (0-4 named, 255 = none)
    pub pitch: u8,
    /// Strike-zone cell 1-9, 0 = none
    pub zone: u8,
    /// Pickoff base 1-3, 0 = none
    pub pickoff: u8,
    /// Third sign 1-4 ("3A".."3D"), 0 = none
    pub third_sign: u8,
    /// Monotonic signal counter (little-endian on the wire)
    pub number: u16,
}

impl PitchSignal {
    /// True if this is a pitch signal (as opposed to a reset)
    pub fn is_pitch(&self) -> bool {
        self.signal_type == 0
    }

    /// True if the rendered report carries a strike-zone grid
    pub fn shows_grid(&self) -> bool {
        self.zone > 0 && self.is_pitch()
    }

    /// True if the rendered report carries a color line
    pub fn shows_color(&self) -> bool {
        self.pitch < 255
    }
}

/// Errors that can occur during decoding or configuration checking
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    #[error("Invalid hex string: {0}")]
    FormatError(String),

    #[error("Expected {expected} bytes, got {actual}")]
    LengthError { expected: usize, actual: usize },

    #[error("Could not read {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid extraction pattern: {0}")]
    PatternError(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_gate() {
        let mut signal = PitchSignal {
            signal_type: 0,
            pitch: 2,
            zone: 5,
            pickoff: 0,
            third_sign: 0,
            number: 10,
        };
        assert!(signal.shows_grid());

        signal.signal_type = 1;
        assert!(!signal.shows_grid());

        signal.signal_type = 0;
        signal.zone = 0;
        assert!(!signal.shows_grid());
    }

    #[test]
    fn test_color_gate() {
        let mut signal = PitchSignal {
            signal_type: 0,
            pitch: 254,
            zone: 0,
            pickoff: 0,
            third_sign: 0,
            number: 0,
        };
        assert!(signal.shows_color());
        signal.pitch = 255;
        assert!(!signal.shows_color());
    }

    #[test]
    fn test_error_display() {
        let err = DecoderError::LengthError { expected: 7, actual: 3 };
        assert_eq!(err.to_string(), "Expected 7 bytes, got 3");

        let err = DecoderError::FileNotFound {
            path: PathBuf::from("missing/main.cpp"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("Could not read missing/main.cpp"));
    }
}
