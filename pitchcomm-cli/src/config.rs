//! Configuration loading and parsing
//!
//! The config file is optional; every section has defaults so an empty file
//! is valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Transmitter firmware source, relative to the project root
pub const DEFAULT_TRANSMITTER: &str = "TDeck_Transmitter/src/main.cpp";

/// Receiver firmware source, relative to the project root
pub const DEFAULT_RECEIVER: &str = "TWatch_Receiver/src/main.cpp";

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SourcesConfig {
    pub transmitter: Option<PathBuf>,
    pub receiver: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
}

impl AppConfig {
    /// Resolve both firmware source paths
    ///
    /// Explicit paths win; config entries and defaults are relative to `root`.
    pub fn resolve_sources(
        &self,
        root: &Path,
        transmitter: Option<&Path>,
        receiver: Option<&Path>,
    ) -> (PathBuf, PathBuf) {
        let tx = resolve_source(
            root,
            transmitter,
            self.sources.transmitter.as_deref(),
            DEFAULT_TRANSMITTER,
        );
        let rx = resolve_source(
            root,
            receiver,
            self.sources.receiver.as_deref(),
            DEFAULT_RECEIVER,
        );
        (tx, rx)
    }
}

fn resolve_source(
    root: &Path,
    explicit: Option<&Path>,
    configured: Option<&Path>,
    default: &str,
) -> PathBuf {
    match (explicit, configured) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(path)) => root.join(path),
        (None, None) => root.join(default),
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [sources]
            transmitter = "TDeck_Transmitter/src/main.cpp"
            receiver = "Heltec_Receiver/src/main.cpp"

            [output]
            format = "json"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config.sources.receiver,
            Some(PathBuf::from("Heltec_Receiver/src/main.cpp"))
        );
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.sources.transmitter.is_none());
        assert_eq!(config.output.format, OutputFormat::Txt);
    }

    #[test]
    fn test_resolve_sources() {
        let root = Path::new("project");
        let config: AppConfig = toml::from_str(
            r#"
            [sources]
            receiver = "XIAO_nRF52840_Receiver/src/main.cpp"
        "#,
        )
        .unwrap();

        let (tx, rx) = config.resolve_sources(root, None, None);
        assert_eq!(tx, root.join(DEFAULT_TRANSMITTER));
        assert_eq!(rx, root.join("XIAO_nRF52840_Receiver/src/main.cpp"));

        let explicit = Path::new("/tmp/tx.cpp");
        let (tx, _) = config.resolve_sources(root, Some(explicit), None);
        assert_eq!(tx, explicit);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result: std::result::Result<AppConfig, _> = toml::from_str(
            r#"
            [output]
            format = "html"
        "#,
        );
        assert!(result.is_err());
    }
}
