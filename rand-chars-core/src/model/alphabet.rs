use std::io;

/// First printable ASCII code (space).
pub const FIRST_PRINTABLE: u8 = 32;

/// Last printable ASCII code (`~`), DEL excluded.
pub const LAST_PRINTABLE: u8 = 126;

/// Ordered set of characters the generator may emit.
///
/// # Invariants
/// - Never empty
/// - Every symbol is ASCII and not a control character
/// - Symbols are unique; index order is construction order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
	/// One byte per symbol, since every symbol is ASCII
	symbols: Vec<u8>,
}

impl Alphabet {
	/// Printable ASCII, codes 32 through 126 inclusive (95 symbols).
	pub fn printable_ascii() -> Self {
		Self { symbols: (FIRST_PRINTABLE..=LAST_PRINTABLE).collect() }
	}

	/// Builds an alphabet from every non-control ASCII code in `first..=last`.
	///
	/// Codes are kept in ascending order.
	///
	/// # Errors
	/// Returns `InvalidInput` if the range is reversed, goes past ASCII,
	/// or contains only control characters.
	pub fn from_range(first: u8, last: u8) -> io::Result<Self> {
		if first > last {
			return Err(invalid(format!("Reversed range: {first}..={last}")));
		}
		if !last.is_ascii() {
			return Err(invalid(format!("Code {last} is outside ASCII")));
		}

		let symbols: Vec<u8> = (first..=last).filter(|c| !c.is_ascii_control()).collect();
		if symbols.is_empty() {
			return Err(invalid(format!("No printable code in {first}..={last}")));
		}

		Ok(Self { symbols })
	}

	/// Builds an alphabet from the characters of `chars`.
	///
	/// Repeated characters are kept once, at their first position.
	///
	/// # Errors
	/// Returns `InvalidInput` if `chars` is empty or holds a non-ASCII
	/// or control character.
	pub fn from_chars(chars: &str) -> io::Result<Self> {
		let mut symbols = Vec::with_capacity(chars.len());
		for c in chars.chars() {
			if !c.is_ascii() || c.is_ascii_control() {
				return Err(invalid(format!("Not a printable ASCII character: {c:?}")));
			}
			let b = c as u8;
			if !symbols.contains(&b) {
				symbols.push(b);
			}
		}

		if symbols.is_empty() {
			return Err(invalid("Alphabet cannot be empty".to_owned()));
		}

		Ok(Self { symbols })
	}

	/// Number of symbols.
	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	/// Whether the alphabet has no symbols.
	pub fn is_empty(&self) -> bool {
		self.symbols.is_empty()
	}

	/// Symbol at `index`, if any.
	pub fn get(&self, index: usize) -> Option<char> {
		self.symbols.get(index).map(|&b| b as char)
	}

	/// Whether `c` is one of the symbols.
	pub fn contains(&self, c: char) -> bool {
		self.position(c).is_some()
	}

	/// Index of `c` in the alphabet.
	pub fn position(&self, c: char) -> Option<usize> {
		if !c.is_ascii() {
			return None;
		}
		self.symbols.iter().position(|&b| b == c as u8)
	}

	/// Raw symbol bytes, in index order.
	pub fn as_bytes(&self) -> &[u8] {
		&self.symbols
	}
}

impl Default for Alphabet {
	fn default() -> Self {
		Self::printable_ascii()
	}
}

fn invalid(message: String) -> io::Error {
	io::Error::new(io::ErrorKind::InvalidInput, message)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn printable_ascii_has_95_ordered_symbols() {
		let alphabet = Alphabet::printable_ascii();

		assert_eq!(alphabet.len(), 95);
		assert_eq!(alphabet.get(0), Some(' '));
		assert_eq!(alphabet.get(94), Some('~'));
		assert_eq!(alphabet.get(95), None);
		assert!(!alphabet.is_empty());
		assert!(alphabet.contains(' ') && alphabet.contains('~'));
		assert!(alphabet.as_bytes().windows(2).all(|w| w[0] < w[1]));
	}

	#[test]
	fn range_drops_control_characters() {
		let alphabet = Alphabet::from_range(0, 127).unwrap();

		assert_eq!(alphabet, Alphabet::printable_ascii());
		assert!(!alphabet.contains('\n'));
		assert!(!alphabet.contains('\u{7f}'));
	}

	#[test]
	fn invalid_ranges_are_rejected() {
		for (first, last) in [(100, 50), (32, 200), (0, 31)] {
			let err = Alphabet::from_range(first, last).unwrap_err();
			assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{first}..={last}");
		}
	}

	#[test]
	fn chars_are_deduplicated_in_order() {
		let alphabet = Alphabet::from_chars("BABBA").unwrap();

		assert_eq!(alphabet.as_bytes(), b"BA");
		assert_eq!(alphabet.position('A'), Some(1));
		assert_eq!(alphabet.position('C'), None);
		assert_eq!(alphabet.position('é'), None);
	}

	#[test]
	fn chars_reject_empty_and_unprintable() {
		for input in ["", "A\tB", "Aé"] {
			assert!(Alphabet::from_chars(input).is_err(), "{input:?}");
		}
	}
}
