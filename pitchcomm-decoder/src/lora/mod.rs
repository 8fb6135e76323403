//! LoRa configuration conformance checking
//!
//! Extracts the RadioLib settings from the transmitter and receiver firmware
//! sources and checks them against each other and the expected baseline.

pub mod compare;
pub mod extract;
pub mod parameters;

pub use compare::{compare, ComparisonReport, ComparisonRow, MatchStatus};
pub use extract::{ConfigExtractor, ExtractedConfig};
pub use parameters::{LoraParameter, ParamValue, ValueKind};
