//! Demo driver: encode a random word, corrupt it, correct it.
//!
//! The driver renders the word after each stage to `out`. Verbose
//! diagnostics go to the same writer, gated by [`DriverConfig::verbose`].

use crate::ecc::hamming::{Codeword, ErrorLocation};
use crate::error::Result;
use rand::Rng;
use std::io::Write;

/// Prefix for every diagnostic line
const PROGRAM_NAME: &str = "hamming_code";

/// Run configuration, built from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Print injected positions and the decode decision
    pub verbose: bool,
    /// Number of random bit flips to inject
    pub errors: u8,
    /// Also render each stage as a matrix
    pub matrix: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            verbose: false,
            errors: 1,
            matrix: false,
        }
    }
}

/// Every stage of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Word after encoding
    pub encoded: Codeword,
    /// Word after fault injection
    pub corrupted: Codeword,
    /// Word after correction
    pub corrected: Codeword,
    /// Flipped positions, in injection order
    pub injected: Vec<usize>,
    /// Decode decision taken on the corrupted word
    pub location: ErrorLocation,
}

impl Report {
    /// Whether correction restored the encoded word.
    pub fn recovered(&self) -> bool {
        self.corrected == self.encoded
    }
}

/// Runs encode, inject and correct once, writing each stage to `out`.
pub fn run<R, W>(config: &DriverConfig, rng: &mut R, out: &mut W) -> Result<Report>
where
    R: Rng + ?Sized,
    W: Write,
{
    let encoded = Codeword::random(rng).encoded();
    show(config, &encoded, out)?;

    let mut corrupted = encoded;
    let mut injected = Vec::with_capacity(config.errors as usize);
    for _ in 0..config.errors {
        let pos = corrupted.inject_error(rng);
        if config.verbose {
            writeln!(out, "{}: error popped in position {}", PROGRAM_NAME, pos)?;
        }
        injected.push(pos);
    }
    show(config, &corrupted, out)?;

    if config.verbose {
        writeln!(
            out,
            "{}: syndrome = {}, parity bit = {}",
            PROGRAM_NAME,
            corrupted.syndrome(),
            corrupted.bits() & 1
        )?;
    }
    let mut corrected = corrupted;
    let location = corrected.correct();
    if config.verbose {
        writeln!(out, "{}: {}", PROGRAM_NAME, location)?;
    }
    show(config, &corrected, out)?;

    log::info!(
        "injected {:?}, decoded {:?}, recovered = {}",
        injected,
        location,
        corrected == encoded
    );

    Ok(Report {
        encoded,
        corrupted,
        corrected,
        injected,
        location,
    })
}

fn show<W: Write>(config: &DriverConfig, word: &Codeword, out: &mut W) -> Result<()> {
    writeln!(out, "{}", word.as_bytes())?;
    if config.matrix {
        write!(out, "{}", word.as_matrix())?;
    }
    Ok(())
}
