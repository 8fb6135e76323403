//! Transmitter/receiver configuration comparison and report

use super::extract::ExtractedConfig;
use super::parameters::{LoraParameter, ParamValue};
use serde::Serialize;
use std::fmt;

const NOT_FOUND: &str = "NOT FOUND";

/// Outcome for one parameter row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    /// Both devices agree with each other and with the baseline
    Ok,
    /// The devices disagree with each other (or only one sets it)
    Mismatch,
    /// The devices agree with each other but not with the baseline
    Warning,
    /// Neither device sets the parameter
    Unresolved,
}

impl MatchStatus {
    /// Classify a row; device disagreement takes precedence over baseline drift
    pub fn classify(
        transmitter: Option<ParamValue>,
        receiver: Option<ParamValue>,
        expected: ParamValue,
    ) -> Self {
        match (transmitter, receiver) {
            (None, None) => MatchStatus::Unresolved,
            (tx, rx) if tx == rx && tx == Some(expected) => MatchStatus::Ok,
            (tx, rx) if tx != rx => MatchStatus::Mismatch,
            _ => MatchStatus::Warning,
        }
    }

    pub fn is_ok(&self) -> bool {
        *self == MatchStatus::Ok
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Ok => write!(f, "OK"),
            MatchStatus::Mismatch => write!(f, "MISMATCH"),
            MatchStatus::Warning => write!(f, "WARNING"),
            MatchStatus::Unresolved => write!(f, "UNRESOLVED"),
        }
    }
}

/// One row of the comparison table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub parameter: LoraParameter,
    pub transmitter: Option<ParamValue>,
    pub receiver: Option<ParamValue>,
    pub expected: ParamValue,
    pub status: MatchStatus,
}

impl ComparisonRow {
    fn display(&self, value: Option<ParamValue>) -> String {
        match value {
            Some(v) => self.parameter.display_value(&v),
            None => NOT_FOUND.to_string(),
        }
    }
}

/// Per-parameter comparison of both devices against the baseline
///
/// `all_match` is derived from the rows when the report is built and is only
/// readable through [`ComparisonReport::all_match`]; it is still serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub rows: Vec<ComparisonRow>,
    all_match: bool,
}

impl ComparisonReport {
    /// True iff every row is OK
    pub fn all_match(&self) -> bool {
        self.all_match
    }

    /// Rows that are not OK
    pub fn failures(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows.iter().filter(|row| !row.status.is_ok())
    }
}

/// Compare transmitter and receiver settings against the expected baseline
pub fn compare(transmitter: &ExtractedConfig, receiver: &ExtractedConfig) -> ComparisonReport {
    let rows: Vec<ComparisonRow> = LoraParameter::ALL
        .iter()
        .map(|&parameter| {
            let tx = transmitter.get(parameter);
            let rx = receiver.get(parameter);
            let expected = parameter.expected();
            let status = MatchStatus::classify(tx, rx, expected);

            if !status.is_ok() {
                log::debug!("{}: {} (tx={:?}, rx={:?})", parameter, status, tx, rx);
            }

            ComparisonRow {
                parameter,
                transmitter: tx,
                receiver: rx,
                expected,
                status,
            }
        })
        .collect();

    let all_match = rows.iter().all(|row| row.status.is_ok());
    ComparisonReport { rows, all_match }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<20} {:<15} {:<15} {:<15} {}",
            "Parameter", "Transmitter", "Receiver", "Expected", "Status"
        )?;
        writeln!(f, "{}", "-".repeat(80))?;

        for row in &self.rows {
            writeln!(
                f,
                "{:<20} {:<15} {:<15} {:<15} {}",
                row.parameter.name(),
                row.display(row.transmitter),
                row.display(row.receiver),
                row.parameter.display_value(&row.expected),
                row.status
            )?;
        }

        writeln!(f)?;
        if self.all_match {
            writeln!(f, "SUCCESS: All LoRa configurations match!")?;
            write!(f, "Both devices should be able to communicate.")
        } else {
            writeln!(f, "FAILURE: Configuration mismatches detected!")?;
            write!(f, "Fix the mismatched parameters before testing communication.")
        }
    }
}
