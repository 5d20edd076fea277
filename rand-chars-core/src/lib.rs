//! Random printable-character file generation library.
//!
//! This crate provides:
//! - A fixed, immutable alphabet of printable ASCII characters
//! - Uniform sampling with replacement over that alphabet
//! - Persisting the sampled sequence as single-byte text
//! - A frequency histogram to sanity-check uniformity
//!
//! Only the high-level API is exposed publicly. File handling
//! is kept internal.

/// Alphabet, generator and frequency checks.
pub mod model;

/// I/O utilities (writing the output file).
///
/// Not exposed
pub(crate) mod io;

pub use model::alphabet::Alphabet;
pub use model::generator::{DEFAULT_COUNT, Generator, generate_and_write};

/// Default output file name, relative to the current working directory.
pub const DEFAULT_OUTPUT: &str = "random_chars.txt";
