//! Extended Hamming(15,11) code over a single 16-bit word.
//!
//! A [`Codeword`] packs 11 data bits, 4 control bits and one overall parity
//! bit into a `u16`. Control bits live at the power-of-two positions 1, 2, 4
//! and 8; each one holds the parity of every position whose index has that
//! bit set. Position 0 holds the parity of the whole word.
//!
//! With this placement the XOR of the indices of all set bits (the syndrome)
//! is zero for a clean word and equals the index of the flipped bit after a
//! single error. The overall parity bit tells a single error (odd weight)
//! apart from a double error (even weight, nonzero syndrome), which gives
//! single-error correction and double-error detection (SECDED).
//!
//! # Examples
//!
//! ```
//! use hamming_code::ecc::hamming::{Codeword, ErrorLocation};
//!
//! let sent = Codeword::from_payload(0b101_0110_0011).unwrap();
//! let mut received = sent;
//! received.flip_bit(7).unwrap();
//!
//! assert_eq!(received.locate_error(), ErrorLocation::BitPosition(7));
//! received.correct();
//! assert_eq!(received, sent);
//! ```

use crate::error::{Error, Result};
use rand::Rng;
use std::fmt;

/// Number of bits in a codeword
pub const WORD_BITS: usize = 16;

/// Number of data bits carried by a codeword
pub const PAYLOAD_BITS: usize = 11;

/// Position of the overall parity bit
pub const PARITY_POSITION: usize = 0;

/// Positions covered by the control bit at position 1 (odd indices)
pub const CONTROL_1_COVER: u16 = 0xAAAA;
/// Positions covered by the control bit at position 2
pub const CONTROL_2_COVER: u16 = 0xCCCC;
/// Positions covered by the control bit at position 4
pub const CONTROL_4_COVER: u16 = 0xF0F0;
/// Positions covered by the control bit at position 8
pub const CONTROL_8_COVER: u16 = 0xFF00;

/// Control bit positions paired with their covers.
const CONTROLS: [(usize, u16); 4] = [
    (1, CONTROL_1_COVER),
    (2, CONTROL_2_COVER),
    (4, CONTROL_4_COVER),
    (8, CONTROL_8_COVER),
];

/// Every check bit: the parity bit and the four control bits.
pub const CHECK_MASK: u16 = 1 | (1 << 1) | (1 << 2) | (1 << 4) | (1 << 8);

/// Data positions, lowest payload bit first.
pub const PAYLOAD_POSITIONS: [usize; PAYLOAD_BITS] = [3, 5, 6, 7, 9, 10, 11, 12, 13, 14, 15];

/// Outcome of syndrome decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorLocation {
    /// The word is consistent with its check bits
    NoError,
    /// Exactly one bit is flipped, at this position
    BitPosition(usize),
    /// Two or more bits are flipped; the position cannot be trusted
    MultipleErrors,
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLocation::NoError => write!(f, "there is probably no error"),
            ErrorLocation::BitPosition(pos) => {
                write!(f, "if there is 1 error, it's in position {}", pos)
            }
            ErrorLocation::MultipleErrors => write!(f, "there is more than 1 error"),
        }
    }
}

/// A 16-bit SECDED codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Codeword(u16);

impl Codeword {
    /// Wraps raw bits without touching the check bits.
    pub const fn new(bits: u16) -> Self {
        Codeword(bits)
    }

    /// Raw bits of the word
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Creates a word with all 16 bits drawn uniformly at random.
    ///
    /// The check bits are garbage until [`Codeword::encode`] is called.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Codeword(rng.gen())
    }

    /// Creates a word with exactly one bit set.
    ///
    /// # Arguments
    ///
    /// * `position` - Bit index in `[0, 16)`
    ///
    /// # Returns
    ///
    /// The singleton word, or `Error::InvalidPosition` if out of range
    pub fn singleton(position: usize) -> Result<Self> {
        check_position(position)?;
        Ok(Codeword(1 << position))
    }

    /// Packs an 11-bit value into the data positions and encodes it.
    ///
    /// Data bit `i` lands on `PAYLOAD_POSITIONS[i]`.
    pub fn from_payload(data: u16) -> Result<Self> {
        if data >> PAYLOAD_BITS != 0 {
            return Err(Error::PayloadTooWide(data));
        }

        let bits = PAYLOAD_POSITIONS
            .iter()
            .enumerate()
            .filter(|&(i, _)| (data >> i) & 1 == 1)
            .fold(0u16, |acc, (_, &pos)| acc | (1 << pos));

        let mut word = Codeword(bits);
        word.encode();
        Ok(word)
    }

    /// Extracts the 11 data bits, ignoring the check bits.
    pub fn payload(&self) -> u16 {
        PAYLOAD_POSITIONS
            .iter()
            .enumerate()
            .filter(|&(_, &pos)| self.bit(pos))
            .fold(0u16, |acc, (i, _)| acc | (1 << i))
    }

    /// Reads the bit at `position`.
    pub fn get_bit(&self, position: usize) -> Result<bool> {
        check_position(position)?;
        Ok(self.bit(position))
    }

    /// Sets or clears the bit at `position`.
    pub fn set_bit(&mut self, position: usize, value: bool) -> Result<()> {
        check_position(position)?;
        if value {
            self.0 |= 1 << position;
        } else {
            self.0 &= !(1 << position);
        }
        Ok(())
    }

    /// Toggles the bit at `position`.
    pub fn flip_bit(&mut self, position: usize) -> Result<()> {
        check_position(position)?;
        self.toggle(position);
        Ok(())
    }

    /// Computes all five check bits from the payload bits.
    ///
    /// Control bits are cleared first, so encoding is idempotent and only
    /// depends on the payload positions.
    pub fn encode(&mut self) {
        self.0 &= !CHECK_MASK;

        for (pos, cover) in CONTROLS {
            let control = parity(self.0 & cover);
            log::trace!("control bit {} = {}", pos, control);
            if control {
                self.0 |= 1 << pos;
            }
        }

        // Parity of the 15 Hamming bits, so the whole word has even weight
        if parity(self.0) {
            self.0 |= 1 << PARITY_POSITION;
        }
    }

    /// Returns an encoded copy of this word.
    pub fn encoded(mut self) -> Self {
        self.encode();
        self
    }

    /// Flips one uniformly chosen bit and returns its position.
    pub fn inject_error<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let pos = rng.gen_range(0..WORD_BITS);
        self.toggle(pos);
        log::debug!("error popped in position {}", pos);
        pos
    }

    /// XOR of the indices of all set bits.
    pub fn syndrome(&self) -> usize {
        (0..WORD_BITS)
            .filter(|&pos| self.bit(pos))
            .fold(0, |acc, pos| acc ^ pos)
    }

    /// Whether the stored parity bit agrees with the parity of positions 1..15.
    pub fn parity_check(&self) -> bool {
        parity(self.0 & !(1 << PARITY_POSITION)) == self.bit(PARITY_POSITION)
    }

    /// Classifies the word as clean, single-error or multi-error.
    pub fn locate_error(&self) -> ErrorLocation {
        let syndrome = self.syndrome();
        let parity_ok = self.parity_check();

        let location = match (syndrome, parity_ok) {
            (0, true) => ErrorLocation::NoError,
            (pos, false) => ErrorLocation::BitPosition(pos),
            (_, true) => ErrorLocation::MultipleErrors,
        };
        log::debug!(
            "syndrome = {}, parity ok = {}: {}",
            syndrome,
            parity_ok,
            location
        );
        location
    }

    /// Corrects a single-bit error in place.
    ///
    /// Clean and multi-error words are left untouched. Returns the location
    /// that was acted on.
    pub fn correct(&mut self) -> ErrorLocation {
        let location = self.locate_error();
        if let ErrorLocation::BitPosition(pos) = location {
            self.toggle(pos);
        }
        location
    }

    /// Returns a corrected copy of this word.
    pub fn corrected(mut self) -> Self {
        self.correct();
        self
    }

    fn bit(&self, position: usize) -> bool {
        (self.0 >> position) & 1 == 1
    }

    fn toggle(&mut self, position: usize) {
        self.0 ^= 1 << position;
    }
}

impl From<u16> for Codeword {
    fn from(bits: u16) -> Self {
        Codeword(bits)
    }
}

impl From<Codeword> for u16 {
    fn from(word: Codeword) -> Self {
        word.0
    }
}

impl fmt::Binary for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

fn parity(bits: u16) -> bool {
    bits.count_ones() % 2 == 1
}

fn check_position(position: usize) -> Result<()> {
    if position >= WORD_BITS {
        return Err(Error::InvalidPosition(position));
    }
    Ok(())
}
