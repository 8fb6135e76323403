//! RadioLib setting extraction from firmware source text
//!
//! This is lenient string scanning, not C++ parsing: the first
//! `radio.<setter>(<literal>)` occurrence wins, commented-out calls included.

use super::parameters::{LoraParameter, ParamValue, ValueKind};
use crate::types::{DecoderError, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parameters found in one firmware source; missing keys were not found
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedConfig {
    values: BTreeMap<LoraParameter, ParamValue>,
}

impl ExtractedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set a parameter value
    pub fn with(mut self, param: LoraParameter, value: ParamValue) -> Self {
        self.values.insert(param, value);
        self
    }

    pub fn get(&self, param: LoraParameter) -> Option<ParamValue> {
        self.values.get(&param).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Compiled extraction patterns for all six parameters
pub struct ConfigExtractor {
    patterns: Vec<(LoraParameter, Regex)>,
}

impl ConfigExtractor {
    /// Compile the extraction patterns
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::with_capacity(LoraParameter::ALL.len());
        for param in LoraParameter::ALL {
            patterns.push((param, Regex::new(&pattern_for(param))?));
        }

        Ok(Self { patterns })
    }

    /// Extract parameter values from source text
    pub fn extract(&self, content: &str) -> ExtractedConfig {
        let mut config = ExtractedConfig::new();

        for (param, regex) in &self.patterns {
            let Some(literal) = regex
                .captures(content)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
            else {
                log::debug!("{} not found", param);
                continue;
            };

            match parse_literal(param.kind(), literal) {
                Some(value) => {
                    log::debug!("{} = {}", param, value);
                    config.values.insert(*param, value);
                }
                None => {
                    log::warn!("Ignoring unparsable {} literal: {:?}", param, literal);
                }
            }
        }

        config
    }

    /// Read a firmware source file and extract its parameter values
    pub fn extract_file(&self, path: &Path) -> Result<ExtractedConfig> {
        log::info!("Reading radio configuration from: {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| DecoderError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(self.extract(&content))
    }
}

fn pattern_for(param: LoraParameter) -> String {
    let literal = match param.kind() {
        ValueKind::Float => r"[\d.]+",
        ValueKind::Integer => r"\d+",
        ValueKind::HexInteger => r"0x[0-9a-fA-F]+|\d+",
    };
    format!(r"radio\.{}\s*\(\s*({})\s*\)", param.setter(), literal)
}

fn parse_literal(kind: ValueKind, literal: &str) -> Option<ParamValue> {
    match kind {
        ValueKind::Float => literal.parse::<f64>().ok().map(ParamValue::Float),
        ValueKind::Integer => literal.parse::<i64>().ok().map(ParamValue::Integer),
        ValueKind::HexInteger => match literal.strip_prefix("0x") {
            Some(digits) => i64::from_str_radix(digits, 16).ok().map(ParamValue::Integer),
            None => literal.parse::<i64>().ok().map(ParamValue::Integer),
        },
    }
}
