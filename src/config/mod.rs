//! Parser configuration management

use std::env;

use anyhow::{bail, Context, Result};

/// Default bound on input length, in bytes
pub const DEFAULT_MAX_INPUT_LEN: usize = 1024;

/// How the KIN8 strategy treats input that carries the keyword but no serial
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Kin8Mode {
    /// Return the empty sentinel like every other strategy
    #[default]
    Lenient,
    /// Report [`SerialError::MissingKin8Serial`](crate::error::SerialError::MissingKin8Serial)
    Strict,
}

impl Kin8Mode {
    pub fn from_arg(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "lenient" => Some(Kin8Mode::Lenient),
            "strict" => Some(Kin8Mode::Strict),
            _ => None,
        }
    }
}

/// Parser configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// KIN8 missing-serial policy
    pub kin8_mode: Kin8Mode,

    /// Inputs longer than this many bytes are rejected unparsed
    pub max_input_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            kin8_mode: Kin8Mode::default(),
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl ParserConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let kin8_mode = match lookup("SERIAL_PARSER_KIN8_MODE") {
            Some(value) => match Kin8Mode::from_arg(&value) {
                Some(mode) => mode,
                None => bail!("Invalid SERIAL_PARSER_KIN8_MODE {value:?}, expected strict or lenient"),
            },
            None => Kin8Mode::default(),
        };

        let max_input_len = lookup("SERIAL_PARSER_MAX_INPUT_LEN")
            .map(|v| v.parse::<usize>())
            .transpose()
            .context("Invalid SERIAL_PARSER_MAX_INPUT_LEN")?
            .unwrap_or(DEFAULT_MAX_INPUT_LEN);

        if max_input_len == 0 {
            bail!("SERIAL_PARSER_MAX_INPUT_LEN must be greater than zero");
        }

        Ok(Self {
            kin8_mode,
            max_input_len,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ParserConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ParserConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ParserConfig::default());
        assert_eq!(config.kin8_mode, Kin8Mode::Lenient);
        assert_eq!(config.max_input_len, DEFAULT_MAX_INPUT_LEN);
    }

    #[test]
    fn test_reads_overrides() {
        let config = load(&[
            ("SERIAL_PARSER_KIN8_MODE", "Strict"),
            ("SERIAL_PARSER_MAX_INPUT_LEN", "64"),
        ])
        .unwrap();
        assert_eq!(config.kin8_mode, Kin8Mode::Strict);
        assert_eq!(config.max_input_len, 64);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(load(&[("SERIAL_PARSER_KIN8_MODE", "sometimes")]).is_err());
        assert!(load(&[("SERIAL_PARSER_MAX_INPUT_LEN", "lots")]).is_err());
        assert!(load(&[("SERIAL_PARSER_MAX_INPUT_LEN", "0")]).is_err());
    }
}
