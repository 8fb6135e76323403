//! Human-readable rendering of decoded PitchSignals
//!
//! Rendering never fails: unknown codes fall back to `Unknown (<code>)`.

use crate::names;
use crate::types::PitchSignal;
use serde::Serialize;
use std::fmt;

const BANNER_WIDTH: usize = 50;
const GRID_BORDER: &str = "+---+---+---+";

/// Serializable view of a signal with resolved display names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalDescription {
    /// Raw decoded fields
    pub raw: PitchSignal,
    pub signal_type: String,
    pub pitch: String,
    /// Only present when the report shows a color line
    pub color: Option<String>,
    pub zone: Option<u8>,
    pub pickoff: Option<u8>,
    pub third_sign: String,
    pub number: u16,
    /// True if the report carries a strike-zone grid
    pub grid: bool,
}

impl PitchSignal {
    /// Resolve all display names for this signal
    pub fn describe(&self) -> SignalDescription {
        SignalDescription {
            raw: *self,
            signal_type: names::signal_type_name(self.signal_type).into_owned(),
            pitch: names::pitch_name(self.pitch).into_owned(),
            color: self
                .shows_color()
                .then(|| names::pitch_color(self.pitch).to_string()),
            zone: (self.zone > 0).then_some(self.zone),
            pickoff: (self.pickoff > 0).then_some(self.pickoff),
            third_sign: names::third_sign_name(self.third_sign).into_owned(),
            number: self.number,
            grid: self.shows_grid(),
        }
    }
}

/// Render the 3x3 strike-zone grid with the target cell marked `X`
///
/// Cells are numbered 1-9 row-major. A zone outside 1-9 marks nothing.
pub fn strike_zone_grid(zone: u8) -> Vec<String> {
    let mut lines = Vec::with_capacity(7);
    lines.push(GRID_BORDER.to_string());
    for row in 0..3u8 {
        let mut line = String::from("|");
        for col in 0..3u8 {
            let cell = row * 3 + col + 1;
            if cell == zone {
                line.push_str(" X |");
            } else {
                line.push_str(&format!(" {} |", cell));
            }
        }
        lines.push(line);
        lines.push(GRID_BORDER.to_string());
    }
    lines
}

impl fmt::Display for PitchSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = "=".repeat(BANNER_WIDTH);

        writeln!(f, "{}", banner)?;
        writeln!(f, "PitchSignal Decoded")?;
        writeln!(f, "{}", banner)?;

        writeln!(f, "Type:       {}", names::signal_type_name(self.signal_type))?;

        writeln!(f, "Pitch:      {}", names::pitch_name(self.pitch))?;
        if self.shows_color() {
            writeln!(f, "Color:      {}", names::pitch_color(self.pitch))?;
        }

        if self.zone > 0 {
            writeln!(f, "Zone:       {} (Strike Zone Grid)", self.zone)?;
        } else {
            writeln!(f, "Zone:       None")?;
        }

        if self.pickoff > 0 {
            writeln!(f, "Pickoff:    PK{} (Base {})", self.pickoff, self.pickoff)?;
        } else {
            writeln!(f, "Pickoff:    None")?;
        }

        writeln!(f, "Third Sign: {}", names::third_sign_name(self.third_sign))?;
        writeln!(f, "Number:     #{}", self.number)?;
        write!(f, "{}", banner)?;

        if self.shows_grid() {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "Strike Zone:")?;
            for line in strike_zone_grid(self.zone) {
                writeln!(f)?;
                write!(f, "{}", line)?;
            }
        }

        Ok(())
    }
}

/// Render a decoded signal as a multi-line report
pub fn format_signal(signal: &PitchSignal) -> String {
    signal.to_string()
}
