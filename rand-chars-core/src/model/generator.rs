use crate::io;
use crate::model::alphabet::Alphabet;
use rand::Rng;
use std::path::Path;

/// Number of characters drawn by a default generator.
pub const DEFAULT_COUNT: usize = 4_000_000;

/// Draws characters uniformly at random from an alphabet and persists them.
///
/// # Responsibilities
/// - Sample `count` symbols independently, with replacement
/// - Keep draw order in the output
/// - Write the result as single-byte text, truncating any previous file
///
/// The thread-local RNG is used unless one is supplied; it is not
/// cryptographically secure and has no explicit seed.
#[derive(Clone, Debug)]
pub struct Generator {
	alphabet: Alphabet,
	count: usize,
}

impl Generator {
	/// Creates a generator drawing `count` characters from `alphabet`.
	pub fn new(alphabet: Alphabet, count: usize) -> Self {
		Self { alphabet, count }
	}

	pub fn alphabet(&self) -> &Alphabet {
		&self.alphabet
	}

	pub fn count(&self) -> usize {
		self.count
	}

	/// Draws `count` characters using `rng`.
	///
	/// # Returns
	/// A `String` of exactly `count` ASCII characters, in draw order.
	pub fn sample<R: Rng>(&self, rng: &mut R) -> String {
		let symbols = self.alphabet.as_bytes();
		let mut output = String::with_capacity(self.count);
		for _ in 0..self.count {
			output.push(symbols[rng.random_range(0..symbols.len())] as char);
		}
		output
	}

	/// Draws `count` characters using the thread-local RNG.
	pub fn generate(&self) -> String {
		self.sample(&mut rand::rng())
	}

	/// Samples with `rng` and writes the result to `path`.
	///
	/// # Errors
	/// Any I/O error raised while creating or writing the file.
	/// A partially written file is not removed.
	pub fn write_with<P: AsRef<Path>, R: Rng>(&self, path: P, rng: &mut R) -> std::io::Result<()> {
		log::debug!(
			"Drawing {} characters from a {}-symbol alphabet",
			self.count,
			self.alphabet.len()
		);
		let output = self.sample(rng);
		io::write_text(path, &output)
	}

	/// Generates a fresh sequence and writes it to `path`.
	///
	/// Re-running on the same path overwrites the previous output.
	pub fn generate_and_write<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
		self.write_with(path, &mut rand::rng())
	}
}

impl Default for Generator {
	/// Printable ASCII (32..=126), `DEFAULT_COUNT` characters.
	fn default() -> Self {
		Self::new(Alphabet::printable_ascii(), DEFAULT_COUNT)
	}
}

/// Draws `count` characters from `alphabet` and writes them to `path`.
///
/// Shorthand for `Generator::new(alphabet, count).generate_and_write(path)`.
pub fn generate_and_write<P: AsRef<Path>>(
	path: P,
	alphabet: Alphabet,
	count: usize,
) -> std::io::Result<()> {
	Generator::new(alphabet, count).generate_and_write(path)
}
