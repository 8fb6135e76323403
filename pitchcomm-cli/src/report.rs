//! Report output
//!
//! Writes decoded signals and comparison reports as text or JSON. Callers
//! pass stdout; tests pass a buffer.

use crate::config::OutputFormat;
use anyhow::Result;
use pitchcomm_decoder::lora::ComparisonReport;
use pitchcomm_decoder::PitchSignal;
use std::io::Write;

/// Usage text for `decode`, including the wire layout
pub const DECODE_USAGE: &str = "\
Usage: pitchcomm decode <hex_bytes>

Examples:
  pitchcomm decode \"00 02 05 00 00 0A 00\"
  pitchcomm decode 00020500000A00

Byte format (7 bytes):
  [0] type      - 0=pitch, 1=reset
  [1] pitch     - 0=FB, 1=CB, 2=CH, 3=SL, 4=PO, 255=none
  [2] zone      - 1-9 strike zone, 0=none
  [3] pickoff   - 0=none, 1-3=base
  [4] thirdSign - 0=none, 1-4=A/B/C/D
  [5-6] number  - uint16_t little-endian signal count";

pub fn print_usage(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", DECODE_USAGE)?;
    Ok(())
}

pub fn print_signal(
    out: &mut impl Write,
    signal: &PitchSignal,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Txt => writeln!(out, "{}", signal)?,
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&signal.describe())?)?
        }
    }
    Ok(())
}

/// Validator banner, printed before any source is read
pub fn print_banner(out: &mut impl Write) -> Result<()> {
    let banner = "=".repeat(60);
    writeln!(out, "{}", banner)?;
    writeln!(out, "LoRa Configuration Validator for T-Deck PitchComm")?;
    writeln!(out, "{}", banner)?;
    writeln!(out)?;
    Ok(())
}

pub fn print_comparison(
    out: &mut impl Write,
    report: &ComparisonReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Txt => writeln!(out, "{}", report)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(report)?)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_every_byte() {
        let mut out = Vec::new();
        print_usage(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Usage: pitchcomm decode <hex_bytes>\n"));
        for field in [
            "  [0] type      - 0=pitch, 1=reset\n",
            "  [1] pitch     - 0=FB, 1=CB, 2=CH, 3=SL, 4=PO, 255=none\n",
            "  [2] zone      - 1-9 strike zone, 0=none\n",
            "  [3] pickoff   - 0=none, 1-3=base\n",
            "  [4] thirdSign - 0=none, 1-4=A/B/C/D\n",
            "  [5-6] number  - uint16_t little-endian signal count\n",
        ] {
            assert!(text.contains(field), "missing {:?}", field);
        }
    }

    #[test]
    fn test_banner_text() {
        let mut out = Vec::new();
        print_banner(&mut out).unwrap();
        let rule = "=".repeat(60);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{rule}\nLoRa Configuration Validator for T-Deck PitchComm\n{rule}\n\n")
        );
    }

    #[test]
    fn test_signal_text_and_json() {
        let signal = pitchcomm_decoder::decode_hex("01 04 00 02 03 01 00").unwrap();

        let mut out = Vec::new();
        print_signal(&mut out, &signal, OutputFormat::Txt).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", signal));

        let mut out = Vec::new();
        print_signal(&mut out, &signal, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["signal_type"], "Reset Signal");
    }

    #[test]
    fn test_comparison_json_shape() {
        use pitchcomm_decoder::lora::{compare, ExtractedConfig};

        let report = compare(&ExtractedConfig::new(), &ExtractedConfig::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["all_match"], false);
        assert_eq!(json["rows"][0]["parameter"], "frequency");
        assert_eq!(json["rows"][0]["status"], "UNRESOLVED");
        assert!(json["rows"][0]["transmitter"].is_null());
        assert_eq!(json["rows"][4]["expected"], 18);
    }
}
