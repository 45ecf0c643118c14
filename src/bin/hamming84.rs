use clap::Parser;
use hamming84::ecc::LogSink;
use hamming84::{io, SimConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Hamming(8,4) noisy channel simulator",
    long_about = "Encodes a file with a Hamming(8,4) code, flips random bits in the encoded \
                  stream and decodes it again, correcting single-bit errors"
)]
struct Args {
    /// File to encode
    input: PathBuf,

    /// Where to write the encoded stream
    #[arg(long, default_value = hamming84::config::DEFAULT_ENCODED_PATH)]
    encoded: PathBuf,

    /// Where to write the decoded stream
    #[arg(long, default_value = hamming84::config::DEFAULT_DECODED_PATH)]
    decoded: PathBuf,

    /// Probability that a codeword gets one bit flipped
    #[arg(short = 'p', long, default_value_t = hamming84::ecc::channel::DEFAULT_FLIP_PROBABILITY)]
    flip_probability: f64,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    let mut config = SimConfig::default()
        .with_flip_probability(args.flip_probability)
        .with_encoded_path(&args.encoded)
        .with_decoded_path(&args.decoded);
    config.seed = args.seed;

    match io::run(&args.input, &config, &mut LogSink) {
        Ok(stats) => {
            log::info!("{}", stats);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
