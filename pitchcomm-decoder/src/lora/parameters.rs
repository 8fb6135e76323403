//! LoRa radio parameters and the expected baseline shared by both devices

use serde::Serialize;
use std::fmt;

/// One of the six RadioLib settings that must agree across the link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoraParameter {
    Frequency,
    SpreadingFactor,
    Bandwidth,
    CodingRate,
    SyncWord,
    OutputPower,
}

/// How a parameter literal is parsed and compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Integer,
    /// Integer, `0x`-prefixed literals read as hex
    HexInteger,
}

impl LoraParameter {
    /// All parameters in report order
    pub const ALL: [LoraParameter; 6] = [
        LoraParameter::Frequency,
        LoraParameter::SpreadingFactor,
        LoraParameter::Bandwidth,
        LoraParameter::CodingRate,
        LoraParameter::SyncWord,
        LoraParameter::OutputPower,
    ];

    /// Report key
    pub fn name(&self) -> &'static str {
        match self {
            LoraParameter::Frequency => "frequency",
            LoraParameter::SpreadingFactor => "spreading_factor",
            LoraParameter::Bandwidth => "bandwidth",
            LoraParameter::CodingRate => "coding_rate",
            LoraParameter::SyncWord => "sync_word",
            LoraParameter::OutputPower => "output_power",
        }
    }

    /// RadioLib method that sets this parameter
    pub fn setter(&self) -> &'static str {
        match self {
            LoraParameter::Frequency => "begin",
            LoraParameter::SpreadingFactor => "setSpreadingFactor",
            LoraParameter::Bandwidth => "setBandwidth",
            LoraParameter::CodingRate => "setCodingRate",
            LoraParameter::SyncWord => "setSyncWord",
            LoraParameter::OutputPower => "setOutputPower",
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            LoraParameter::Frequency | LoraParameter::Bandwidth => ValueKind::Float,
            LoraParameter::SyncWord => ValueKind::HexInteger,
            _ => ValueKind::Integer,
        }
    }

    /// Expected value both devices must be configured with
    pub fn expected(&self) -> ParamValue {
        match self {
            LoraParameter::Frequency => ParamValue::Float(915.0),
            LoraParameter::SpreadingFactor => ParamValue::Integer(10),
            LoraParameter::Bandwidth => ParamValue::Float(125.0),
            LoraParameter::CodingRate => ParamValue::Integer(8),
            LoraParameter::SyncWord => ParamValue::Integer(0x12),
            LoraParameter::OutputPower => ParamValue::Integer(22),
        }
    }

    /// Format a value with this parameter's unit
    pub fn display_value(&self, value: &ParamValue) -> String {
        match self {
            LoraParameter::SyncWord => match value {
                ParamValue::Integer(v) => format!("0x{:02X}", v),
                ParamValue::Float(_) => value.to_string(),
            },
            LoraParameter::Frequency => format!("{} MHz", value),
            LoraParameter::Bandwidth => format!("{} kHz", value),
            LoraParameter::OutputPower => format!("{} dBm", value),
            _ => value.to_string(),
        }
    }
}

impl fmt::Display for LoraParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric parameter value extracted from source text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Integer(v) => write!(f, "{}", v),
            // Debug keeps the trailing ".0" on whole numbers (915.0)
            ParamValue::Float(v) => write!(f, "{:?}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_order() {
        let names: Vec<_> = LoraParameter::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec![
                "frequency",
                "spreading_factor",
                "bandwidth",
                "coding_rate",
                "sync_word",
                "output_power"
            ]
        );
    }

    #[test]
    fn test_display_values() {
        assert_eq!(
            LoraParameter::Frequency.display_value(&ParamValue::Float(915.0)),
            "915.0 MHz"
        );
        assert_eq!(
            LoraParameter::Bandwidth.display_value(&ParamValue::Float(62.5)),
            "62.5 kHz"
        );
        assert_eq!(
            LoraParameter::SyncWord.display_value(&ParamValue::Integer(0x12)),
            "0x12"
        );
        assert_eq!(
            LoraParameter::SyncWord.display_value(&ParamValue::Integer(0x3444)),
            "0x3444"
        );
        assert_eq!(
            LoraParameter::OutputPower.display_value(&ParamValue::Integer(22)),
            "22 dBm"
        );
        assert_eq!(
            LoraParameter::CodingRate.display_value(&ParamValue::Integer(8)),
            "8"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(LoraParameter::Frequency.kind(), ValueKind::Float);
        assert_eq!(LoraParameter::SyncWord.kind(), ValueKind::HexInteger);
        assert_eq!(LoraParameter::OutputPower.kind(), ValueKind::Integer);
    }
}
