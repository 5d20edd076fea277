use crate::model::alphabet::Alphabet;

/// Per-symbol occurrence counts of a text over an alphabet.
///
/// Characters outside the alphabet are tallied separately in `foreign`
/// and excluded from the chi-square statistic.
#[derive(Clone, Debug)]
pub struct Histogram {
	alphabet: Alphabet,
	/// Indexed like the alphabet
	counts: Vec<u64>,
	foreign: u64,
}

impl Histogram {
	/// Counts every character of `text` against `alphabet`.
	pub fn from_text(alphabet: &Alphabet, text: &str) -> Self {
		let mut counts = vec![0u64; alphabet.len()];
		let mut foreign = 0;

		for c in text.chars() {
			match alphabet.position(c) {
				Some(i) => counts[i] += 1,
				None => foreign += 1,
			}
		}

		Self { alphabet: alphabet.clone(), counts, foreign }
	}

	/// Number of in-alphabet characters counted.
	pub fn total(&self) -> u64 {
		self.counts.iter().sum()
	}

	/// Occurrences of `c`; zero for characters outside the alphabet.
	pub fn count(&self, c: char) -> u64 {
		self.alphabet.position(c).map_or(0, |i| self.counts[i])
	}

	/// Characters that were not alphabet members.
	pub fn foreign(&self) -> u64 {
		self.foreign
	}

	/// Pearson chi-square statistic against a uniform distribution.
	///
	/// Degrees of freedom are `alphabet.len() - 1`. Returns `0.0` for an
	/// empty histogram.
	pub fn chi_square(&self) -> f64 {
		let total = self.total();
		if total == 0 {
			return 0.0;
		}

		let expected = total as f64 / self.counts.len() as f64;
		self.counts
			.iter()
			.map(|&observed| {
				let diff = observed as f64 - expected;
				diff * diff / expected
			})
			.sum()
	}

	/// `true` if every character was an alphabet member and the
	/// chi-square statistic does not exceed `critical`.
	pub fn looks_uniform(&self, critical: f64) -> bool {
		self.foreign == 0 && self.chi_square() <= critical
	}
}
