//! PitchComm Decoder Library
//!
//! A stateless library for the T-Deck PitchComm LoRa link: decodes the 7-byte
//! PitchSignal packet and checks that the transmitter and receiver firmware
//! agree on their radio settings.
//!
//! # Architecture
//!
//! Two independent components:
//! - Signal codec: hex normalization, decode/encode, text rendering with the
//!   strike-zone grid
//! - LoRa conformance checker: extracts RadioLib settings from firmware
//!   sources and compares both devices against the expected baseline
//!
//! The library does NOT:
//! - Talk to the radio
//! - Locate firmware sources on disk
//! - Print anything
//!
//! Command-line handling lives in the application layer (pitchcomm-cli).
//!
//! # Example Usage
//!
//! ```
//! use pitchcomm_decoder::{decode_hex, format_signal};
//!
//! let signal = decode_hex("00 02 05 00 00 0A 00").unwrap();
//! let report = format_signal(&signal);
//! assert!(report.contains("Pitch:      Changeup (CH)"));
//! assert!(report.contains("| 4 | X | 6 |"));
//! ```
//!
//! ```
//! use pitchcomm_decoder::lora::{compare, ConfigExtractor};
//!
//! let extractor = ConfigExtractor::new().unwrap();
//! let tx = extractor.extract("radio.begin(915.0); radio.setSpreadingFactor(10);");
//! let rx = extractor.extract("radio.begin(915.0); radio.setSpreadingFactor(12);");
//!
//! let report = compare(&tx, &rx);
//! assert!(!report.all_match());
//! ```

// Public modules
pub mod decoder;
pub mod format;
pub mod hex;
pub mod lora;
pub mod names;
pub mod types;

// Re-export main types for convenience
pub use crate::hex::parse_hex_string;
pub use decoder::{decode_hex, decode_signal};
pub use format::{format_signal, strike_zone_grid, SignalDescription};
pub use types::{DecoderError, PitchSignal, Result, SIGNAL_SIZE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
