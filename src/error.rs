//! Errors raised while parsing serials

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerialError {
    #[error("Input is {len} bytes, longer than the {max} byte limit")]
    InputTooLong { len: usize, max: usize },

    /// Routed to the KIN8 strategy but no `kin8-<digits>` serial was present
    #[error("No KIN8 serial found in {input:?}")]
    MissingKin8Serial { input: String },
}

pub type Result<T> = std::result::Result<T, SerialError>;
