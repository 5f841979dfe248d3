//! Media identifiers

pub mod serial;

pub use serial::SerialInfo;
