//! Parsed serial record and its display forms

use std::fmt;

use serde::{Deserialize, Serialize};

/// A serial identifier recovered from a release filename.
///
/// A record with an empty `maker` and `serial` is the "could not parse"
/// sentinel; see [`SerialInfo::is_empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SerialInfo {
    pub maker: String,
    pub serial: String,
    /// Disc/part marker, empty or `CD<n>`
    pub cd: String,
    /// Chapter marker; never set by the parser itself
    pub ch: String,
}

impl SerialInfo {
    pub fn new(maker: impl Into<String>, serial: impl Into<String>, cd: impl Into<String>) -> Self {
        Self {
            maker: maker.into(),
            serial: serial.into(),
            cd: cd.into(),
            ch: String::new(),
        }
    }

    /// The empty-match sentinel
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a copy carrying the given chapter marker
    pub fn with_chapter(self, ch: impl Into<String>) -> Self {
        Self { ch: ch.into(), ..self }
    }

    pub fn is_empty(&self) -> bool {
        self.maker.is_empty() && self.serial.is_empty()
    }

    /// Canonical `MAKER-SERIAL` form
    pub fn number(&self) -> String {
        format!("{}-{}", self.maker.to_uppercase(), self.serial)
    }

    /// Filesystem-safe name: the number plus `-CDn` and `-C` markers when present
    pub fn filename(&self) -> String {
        let mut name = self.number();
        if !self.cd.is_empty() {
            name.push('-');
            name.push_str(&self.cd.to_uppercase());
        }
        if !self.ch.is_empty() {
            name.push_str("-C");
        }
        name
    }
}

impl fmt::Display for SerialInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.maker.to_uppercase(), self.serial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_and_display() {
        let info = SerialInfo::new("1pon", "061524-001", "");
        assert_eq!(info.number(), "1PON-061524-001");
        assert_eq!(info.to_string(), "1PON-061524-001");
    }

    #[test]
    fn test_filename_with_markers() {
        let info = SerialInfo::new("KIN8", "3911", "cd1");
        assert_eq!(info.filename(), "KIN8-3911-CD1");

        let info = info.with_chapter("1");
        assert_eq!(info.filename(), "KIN8-3911-CD1-C");
        // Chapter marker only affects the filename
        assert_eq!(info.number(), "KIN8-3911");
    }

    #[test]
    fn test_filename_without_disc() {
        let info = SerialInfo::new("START", "135V", "").with_chapter("yes");
        assert_eq!(info.filename(), "START-135V-C");
    }

    #[test]
    fn test_empty_sentinel() {
        let info = SerialInfo::empty();
        assert!(info.is_empty());
        assert_eq!(info, SerialInfo::new("", "", ""));
        assert_eq!(info.number(), "-");
        assert!(!SerialInfo::new("FC2-PPV", "123456", "").is_empty());
    }
}
