//! Text views of a codeword.
//!
//! Both views print bits in index order, bit 0 first:
//!
//! ```
//! use hamming_code::ecc::hamming::Codeword;
//! use hamming_code::ecc::render::{ByteView, MatrixView};
//!
//! let word = Codeword::new(0b1000_0000_0000_0011);
//! assert_eq!(ByteView(&word).to_string(), "11000000 00000001");
//! assert_eq!(
//!     MatrixView(&word).to_string(),
//!     "1 1 0 0\n0 0 0 0\n0 0 0 0\n0 0 0 1\n"
//! );
//! ```

use crate::ecc::hamming::{Codeword, WORD_BITS};
use bitvec::prelude::*;
use std::fmt;

/// Bits per group in [`ByteView`]
pub const BYTE_BITS: usize = 8;

/// Side of the square in [`MatrixView`]; `MATRIX_SIZE * MATRIX_SIZE == WORD_BITS`
pub const MATRIX_SIZE: usize = 4;

/// Renders a codeword as two space-separated groups of 8 bits.
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a>(pub &'a Codeword);

/// Renders a codeword as a 4x4 matrix, row-major by bit index.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a>(pub &'a Codeword);

fn write_bits(f: &mut fmt::Formatter<'_>, bits: &BitSlice<u16, Lsb0>, sep: &str) -> fmt::Result {
    for (i, bit) in bits.iter().by_vals().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        f.write_str(if bit { "1" } else { "0" })?;
    }
    Ok(())
}

impl fmt::Display for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.0.bits();
        let bits = &raw.view_bits::<Lsb0>()[..WORD_BITS];

        for (i, byte) in bits.chunks(BYTE_BITS).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write_bits(f, byte, "")?;
        }
        Ok(())
    }
}

impl fmt::Display for MatrixView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.0.bits();
        let bits = &raw.view_bits::<Lsb0>()[..MATRIX_SIZE * MATRIX_SIZE];

        for row in bits.chunks(MATRIX_SIZE) {
            write_bits(f, row, " ")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Codeword {
    /// Byte-grouped view of this word
    pub fn as_bytes(&self) -> ByteView<'_> {
        ByteView(self)
    }

    /// Matrix view of this word
    pub fn as_matrix(&self) -> MatrixView<'_> {
        MatrixView(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_view() {
        assert_eq!(Codeword::new(0).as_bytes().to_string(), "00000000 00000000");
        assert_eq!(
            Codeword::new(0x0AAF).as_bytes().to_string(),
            "11110101 01010000"
        );
        assert_eq!(
            Codeword::new(u16::MAX).as_bytes().to_string(),
            "11111111 11111111"
        );
    }

    #[test]
    fn test_matrix_view() {
        let word = Codeword::singleton(5).unwrap();
        assert_eq!(
            word.as_matrix().to_string(),
            "0 0 0 0\n0 1 0 0\n0 0 0 0\n0 0 0 0\n"
        );
    }

    #[test]
    fn test_matrix_covers_whole_word() {
        assert_eq!(MATRIX_SIZE * MATRIX_SIZE, WORD_BITS);
        let rendered = Codeword::new(u16::MAX).as_matrix().to_string();
        assert_eq!(rendered.matches('1').count(), WORD_BITS);
        assert_eq!(rendered.lines().count(), MATRIX_SIZE);
    }
}
