//! PitchComm CLI Application
//!
//! This is the command-line interface for the PitchComm tooling.
//! It uses the pitchcomm-decoder library and adds:
//! - Hex packet decoding with text/JSON output
//! - LoRa configuration checks across the transmitter and receiver firmware
//! - Config file support and exit codes for scripting

use anyhow::Result;
use clap::{Parser, Subcommand};
use pitchcomm_decoder::lora::{compare, ConfigExtractor, ExtractedConfig};
use pitchcomm_decoder::DecoderError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod config;
mod report;

use config::{AppConfig, OutputFormat};

/// PitchComm - Decode PitchSignal packets and check LoRa settings
#[derive(Parser, Debug)]
#[command(name = "pitchcomm")]
#[command(about = "Decode PitchSignal packets and validate LoRa configuration", long_about = None)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a 7-byte PitchSignal from hex (spaces and 0x prefixes allowed)
    Decode {
        /// Hex bytes, e.g. "00 02 05 00 00 0A 00" or 00020500000A00
        #[arg(value_name = "HEX")]
        hex: Vec<String>,

        /// Print the decoded signal as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare LoRa settings between transmitter and receiver firmware
    CheckLora {
        /// Project root containing the firmware directories
        #[arg(long, value_name = "DIR", default_value = ".")]
        root: PathBuf,

        /// Transmitter firmware source (overrides config and default)
        #[arg(long, value_name = "FILE")]
        transmitter: Option<PathBuf>,

        /// Receiver firmware source (overrides config and default)
        #[arg(long, value_name = "FILE")]
        receiver: Option<PathBuf>,

        /// Path to configuration file (config.toml)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the comparison report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::debug!("PitchComm CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using decoder library v{}", pitchcomm_decoder::VERSION);

    let mut out = io::stdout().lock();

    match &args.command {
        Command::Decode { hex, json } => {
            exit_code(decode_mode(&mut out, hex, output_format(*json))?)
        }
        Command::CheckLora {
            root,
            transmitter,
            receiver,
            config: config_path,
            json,
        } => {
            let app_config = match config_path {
                Some(path) => {
                    log::info!("Loading configuration from: {:?}", path);
                    config::load_config(path)?
                }
                None => AppConfig::default(),
            };
            let format = if *json {
                OutputFormat::Json
            } else {
                app_config.output.format
            };
            let (tx_path, rx_path) =
                app_config.resolve_sources(root, transmitter.as_deref(), receiver.as_deref());
            exit_code(check_lora_mode(&mut out, &tx_path, &rx_path, format)?)
        }
    }
}

fn exit_code(success: bool) -> Result<ExitCode> {
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn output_format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Txt
    }
}

/// Decode mode - parse hex, decode, print the report
fn decode_mode(out: &mut impl Write, hex: &[String], format: OutputFormat) -> Result<bool> {
    if hex.is_empty() {
        report::print_usage(out)?;
        return Ok(false);
    }

    let input = hex.join(" ");
    match pitchcomm_decoder::decode_hex(&input) {
        Ok(signal) => {
            report::print_signal(out, &signal, format)?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            Ok(false)
        }
    }
}

/// LoRa check mode - extract both sources, compare, print the table
fn check_lora_mode(
    out: &mut impl Write,
    tx_path: &Path,
    rx_path: &Path,
    format: OutputFormat,
) -> Result<bool> {
    let extractor = ConfigExtractor::new()?;

    if format == OutputFormat::Txt {
        report::print_banner(out)?;
    }

    let Some(tx_config) = read_source(out, &extractor, tx_path)? else {
        return Ok(false);
    };
    let Some(rx_config) = read_source(out, &extractor, rx_path)? else {
        return Ok(false);
    };

    let comparison = compare(&tx_config, &rx_config);
    report::print_comparison(out, &comparison, format)?;

    for row in comparison.failures() {
        log::warn!("{}: {}", row.parameter, row.status);
    }
    Ok(comparison.all_match())
}

/// Extract one source; `None` after reporting an unreadable file
fn read_source(
    out: &mut impl Write,
    extractor: &ConfigExtractor,
    path: &Path,
) -> Result<Option<ExtractedConfig>> {
    match extractor.extract_file(path) {
        Ok(config) => Ok(Some(config)),
        Err(DecoderError::FileNotFound { path, source }) => {
            log::debug!("Read failure: {}", source);
            writeln!(out, "ERROR: Could not read {}", path.display())?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
