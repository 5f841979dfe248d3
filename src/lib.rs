//! Serial identifier parsing for media release filenames
//!
//! Recovers a maker code, serial, and disc suffix from noisy names such as
//! `hhd800.com@053124-001-1pon` or `[FHD]start-135V`.
//!
//! ```
//! let info = av_serial_parser::parse_serial("1PON-061524-001");
//! assert_eq!(info.number(), "1PON-061524-001");
//! ```

pub mod config;
pub mod error;
pub mod media;
pub mod services;

pub use config::{Kin8Mode, ParserConfig};
pub use error::SerialError;
pub use media::SerialInfo;
pub use services::{normalize, SerialParser, Strategy};

/// Parse `input` with the default configuration.
///
/// Never fails: anything unparseable, including oversized input, comes back
/// as the empty sentinel (check [`SerialInfo::is_empty`]).
pub fn parse_serial(input: &str) -> SerialInfo {
    SerialParser::default().parse_lenient(input)
}
