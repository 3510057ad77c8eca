//! Error types for the SECDED codec and its driver.

use thiserror::Error;

/// Errors raised by codeword construction and the driver.
///
/// A detected-but-uncorrectable word is not an error; it is reported as
/// [`ErrorLocation::MultipleErrors`](crate::ecc::hamming::ErrorLocation::MultipleErrors).
#[derive(Error, Debug)]
pub enum Error {
    /// Bit position outside `[0, 16)`.
    #[error("Invalid bit position: {0} (must be 0-15)")]
    InvalidPosition(usize),

    /// Payload does not fit in the 11 data bits of a codeword.
    #[error("Payload {0:#x} does not fit in 11 bits")]
    PayloadTooWide(u16),

    /// Writing driver output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;
