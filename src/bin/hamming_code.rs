use std::io::{BufWriter, Write as _};
use std::process::ExitCode;

use clap::Parser;
use hamming_code::driver::{self, DriverConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::filter::LevelFilter;

const PROGRAM_DESCRIPTION: &str = "Error correction with Hamming codes (15,11) + extra parity bit";

/// Encodes a random word, pops an error in it and corrects it
#[derive(Parser, Debug)]
#[command(name = "hamming_code", about = PROGRAM_DESCRIPTION, disable_version_flag = true)]
struct Opts {
    /// verbose output
    #[arg(short, long)]
    verbose: bool,

    /// display version and exit
    #[arg(short = 'V', long)]
    version: bool,

    /// number of bit errors to inject
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=16))]
    errors: u8,

    /// also show each stage as a 4x4 matrix
    #[arg(short, long)]
    matrix: bool,

    /// seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// log level for stderr diagnostics
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    if opts.version {
        println!(
            "hamming_code {}.{}",
            env!("CARGO_PKG_VERSION_MAJOR"),
            env!("CARGO_PKG_VERSION_MINOR")
        );
        println!("{}", PROGRAM_DESCRIPTION);
        return ExitCode::SUCCESS;
    }

    tracing_subscriber::fmt()
        .with_max_level(opts.log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = DriverConfig {
        verbose: opts.verbose,
        errors: opts.errors,
        matrix: opts.matrix,
    };
    let mut rng = match opts.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };

    let mut stdout = BufWriter::new(std::io::stdout().lock());
    let result = driver::run(&config, &mut rng, &mut stdout)
        .and_then(|_| stdout.flush().map_err(Into::into));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("hamming_code: {}", e);
            ExitCode::FAILURE
        }
    }
}
