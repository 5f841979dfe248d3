//! Serial extraction for release filenames
//!
//! Parses filenames like:
//! - "1PON-061524-001"
//! - "hhd800.com@053124-001-1pon"
//! - "KIN8-3911-cd1"
//! - "start-135V"
//!
//! A handful of makers number their releases in a house style, so each gets
//! its own [`Strategy`]. Everything else goes through [`Strategy::Generic`],
//! which splits an alphabetic maker prefix from the serial body.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{Kin8Mode, ParserConfig};
use crate::error::{Result, SerialError};
use crate::media::SerialInfo;
use crate::services::text_utils::normalize;

/// Extraction strategy, chosen from maker keywords in the raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Fc2,
    OnePondo,
    Caribbean,
    TenMusume,
    Pacopacomama,
    Kin8,
    Generic,
}

/// Patterns for a maker whose serials are digit groups joined by dashes
struct NumberedMaker {
    label: &'static str,
    /// Used when the text mentions "cd"; group 1 is the optional disc tag
    disc_tagged: Regex,
    /// Used otherwise; group 1 is the trailing part number
    disc_numbered: Regex,
    serial: Regex,
}

impl NumberedMaker {
    fn new(label: &'static str, disc_tagged: &str, disc_numbered: &str, serial: &str) -> Self {
        Self {
            label,
            disc_tagged: Regex::new(disc_tagged).expect("disc tag regex should compile"),
            disc_numbered: Regex::new(disc_numbered).expect("disc number regex should compile"),
            serial: Regex::new(serial).expect("serial regex should compile"),
        }
    }

    fn parse(&self, text: &str) -> SerialInfo {
        let cd = disc_suffix(text, &self.disc_tagged, &self.disc_numbered);

        match self.serial.find(text) {
            Some(m) => SerialInfo::new(self.label, m.as_str().to_uppercase(), cd),
            None => SerialInfo::empty(),
        }
    }
}

static FC2: Lazy<NumberedMaker> =
    Lazy::new(|| NumberedMaker::new("FC2-PPV", r"\d{3,}-(cd\d+)?", r"\d{3,}-(\d+)+", r"\d{3,}"));

static ONE_PONDO: Lazy<NumberedMaker> = Lazy::new(|| {
    NumberedMaker::new(
        "1PON",
        r"1pon-(cd\d+)?",
        r"1pon-\d+-\d+-(\d{1,2})+",
        r"\d{3,}-\d{3,}",
    )
});

static CARIBBEAN: Lazy<NumberedMaker> = Lazy::new(|| {
    NumberedMaker::new(
        "CARIB",
        r"carib-(cd\d+)?",
        r"carib-\d+-\d+-(\d{1,2})+",
        r"\d{3,}-\d{3,}",
    )
});

// 10musume uses two-digit sequence numbers.
static TEN_MUSUME: Lazy<NumberedMaker> = Lazy::new(|| {
    NumberedMaker::new(
        "10MU",
        r"10mu-(cd\d+)?",
        r"10mu-\d+-\d+-(\d{1,2})+",
        r"\d{3,}-\d{2,}",
    )
});

static PACOPACOMAMA: Lazy<NumberedMaker> = Lazy::new(|| {
    NumberedMaker::new(
        "PACO",
        r"paco-(cd\d+)?",
        r"paco-\d+-\d+-(\d{1,2})+",
        r"\d{3,}-\d{3,}",
    )
});

static KIN8_SERIAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"kin8-(\d{3,})").expect("kin8 serial regex should compile"));

static KIN8_DISC_NUMBERED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{3,}-(\d{1,2})+").expect("kin8 disc regex should compile"));

// A single trailing newline still counts as the end of the name.
static TRAILING_DISC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(cd\d+)\n?$").expect("trailing disc regex should compile"));

static GENERIC_DISC_NUMBERED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{3,}-(\d+)+").expect("generic disc regex should compile"));

// ASCII word characters only for the serial body.
static GENERIC_SERIAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z]+)[-_]?((?-u:\w)+)").expect("generic serial regex should compile")
});

static TRAILING_C_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)c$").expect("trailing c regex should compile"));

static DIGIT_C_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)(c)").expect("digit c regex should compile"));

static CHAPTER_SUFFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d+ch$").expect("chapter suffix regex should compile"));

impl Strategy {
    /// Strategies with a maker keyword, in selection priority order
    pub const KEYWORDED: [Strategy; 6] = [
        Strategy::Fc2,
        Strategy::OnePondo,
        Strategy::Caribbean,
        Strategy::TenMusume,
        Strategy::Pacopacomama,
        Strategy::Kin8,
    ];

    /// Pick a strategy from maker keywords in the raw, un-normalized input.
    ///
    /// The first keyword found in [`Strategy::KEYWORDED`] order wins.
    pub fn select(input: &str) -> Self {
        let lower = input.to_lowercase();
        Self::KEYWORDED
            .into_iter()
            .find(|strategy| strategy.keyword().is_some_and(|kw| lower.contains(kw)))
            .unwrap_or(Strategy::Generic)
    }

    /// Substring that routes input to this strategy
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Strategy::Fc2 => Some("fc2"),
            Strategy::OnePondo => Some("1pon"),
            Strategy::Caribbean => Some("carib"),
            Strategy::TenMusume => Some("10mu"),
            Strategy::Pacopacomama => Some("paco"),
            Strategy::Kin8 => Some("kin8"),
            Strategy::Generic => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Fc2 => "fc2",
            Strategy::OnePondo => "1pon",
            Strategy::Caribbean => "carib",
            Strategy::TenMusume => "10mu",
            Strategy::Pacopacomama => "paco",
            Strategy::Kin8 => "kin8",
            Strategy::Generic => "generic",
        }
    }

    /// Normalize `input` and extract its serial.
    ///
    /// A failed match yields the empty sentinel. The one exception is KIN8 in
    /// [`Kin8Mode::Strict`], where a missing serial is an error.
    pub fn parse(self, input: &str, kin8_mode: Kin8Mode) -> Result<SerialInfo> {
        let text = normalize(input);

        let info = match self {
            Strategy::Fc2 => FC2.parse(&text),
            Strategy::OnePondo => ONE_PONDO.parse(&text),
            Strategy::Caribbean => CARIBBEAN.parse(&text),
            Strategy::TenMusume => TEN_MUSUME.parse(&text),
            Strategy::Pacopacomama => PACOPACOMAMA.parse(&text),
            Strategy::Kin8 => parse_kin8(input, &text, kin8_mode)?,
            Strategy::Generic => parse_generic(&text),
        };

        debug!(
            input = input,
            normalized = %text,
            strategy = self.name(),
            maker = %info.maker,
            serial = %info.serial,
            cd = %info.cd,
            "Parsed serial"
        );

        Ok(info)
    }
}

/// Configured entry point: length guard, strategy selection, extraction
#[derive(Debug, Clone, Default)]
pub struct SerialParser {
    config: ParserConfig,
}

impl SerialParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `input`, returning the empty sentinel when nothing matched.
    ///
    /// Errors are reserved for oversized input and, in strict mode, a KIN8
    /// input without a serial.
    pub fn parse(&self, input: &str) -> Result<SerialInfo> {
        if input.len() > self.config.max_input_len {
            return Err(SerialError::InputTooLong {
                len: input.len(),
                max: self.config.max_input_len,
            });
        }

        Strategy::select(input).parse(input, self.config.kin8_mode)
    }

    /// Like [`SerialParser::parse`], but every error becomes the empty sentinel
    pub fn parse_lenient(&self, input: &str) -> SerialInfo {
        self.parse(input).unwrap_or_else(|e| {
            warn!(error = %e, "Treating input as unparseable");
            SerialInfo::empty()
        })
    }
}

/// Disc suffix shared by every strategy: an explicit `cdN` tag when the text
/// mentions "cd", otherwise a trailing part number rendered as `CDN`.
fn disc_suffix(text: &str, tagged: &Regex, numbered: &Regex) -> String {
    if text.contains("cd") {
        tagged
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_uppercase())
            .unwrap_or_default()
    } else {
        numbered
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| format!("CD{}", m.as_str()))
            .unwrap_or_default()
    }
}

/// `input` is the caller's raw text, kept for the error message
fn parse_kin8(input: &str, text: &str, mode: Kin8Mode) -> Result<SerialInfo> {
    let Some(serial) = KIN8_SERIAL_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_uppercase())
    else {
        return match mode {
            Kin8Mode::Strict => Err(SerialError::MissingKin8Serial {
                input: input.to_string(),
            }),
            Kin8Mode::Lenient => Ok(SerialInfo::empty()),
        };
    };

    let cd = disc_suffix(text, &TRAILING_DISC_REGEX, &KIN8_DISC_NUMBERED_REGEX);
    Ok(SerialInfo::new("KIN8", serial, cd))
}

fn parse_generic(text: &str) -> SerialInfo {
    let Some(caps) = GENERIC_SERIAL_REGEX.captures(text) else {
        return SerialInfo::empty();
    };
    let maker = &caps[1];
    let serial = &caps[2];

    let cd = disc_suffix(text, &TRAILING_DISC_REGEX, &GENERIC_DISC_NUMBERED_REGEX);
    let serial = trim_serial_markers(serial);

    SerialInfo::new(maker.to_uppercase(), serial.to_uppercase(), cd)
}

/// Drop uncensored/chapter markers glued onto a generic serial body
fn trim_serial_markers(serial: &str) -> String {
    let serial = TRAILING_C_REGEX.replace(serial, "");
    let mut serial = DIGIT_C_REGEX.replace_all(&serial, "${1}").into_owned();

    if CHAPTER_SUFFIX_REGEX.is_match(&serial) {
        serial.truncate(serial.len() - 2);
    }
    serial
}
