//! Text normalization and serial extraction

pub mod serial_parser;
pub mod text_utils;

pub use serial_parser::{SerialParser, Strategy};
pub use text_utils::normalize;
