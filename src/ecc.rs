//! Single-word error correction.
//!
//! This module provides an extended Hamming(15,11) code over a 16-bit word:
//! - Encoding of 11 data bits with 4 control bits and one overall parity bit
//! - Syndrome decoding that corrects any single-bit error
//! - Detection (without correction) of double-bit errors
//!
//! # Examples
//!
//! ```rust
//! use hamming_code::ecc::{Codeword, ErrorLocation};
//!
//! let mut word = Codeword::new(0b0000_1010_1010_1010);
//! word.encode();
//! assert_eq!(word.bits(), 0x0AAF);
//!
//! word.flip_bit(0).unwrap();
//! word.flip_bit(9).unwrap();
//! assert_eq!(word.locate_error(), ErrorLocation::MultipleErrors);
//! ```

/// Extended Hamming(15,11) codeword
pub mod hamming;
/// Byte and matrix renderings
pub mod render;

pub use hamming::{Codeword, ErrorLocation, PAYLOAD_BITS, WORD_BITS};
pub use render::{ByteView, MatrixView};
