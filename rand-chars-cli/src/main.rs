use std::path::PathBuf;

use clap::Parser;
use rand_chars_core::{DEFAULT_OUTPUT, Generator};

/// Writes 4,000,000 random printable ASCII characters to a file.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output file, created or truncated
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Printable ASCII (32..=126), 4,000,000 draws
    let generator = Generator::default();
    generator.generate_and_write(&cli.output)?;

    log::debug!("Done: {}", cli.output.display());
    Ok(())
}
