use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes `contents` to a file, creating it or truncating an existing one.
///
/// - Writes the whole buffer in one call
/// - The handle is dropped on every exit path
/// - A partially written file is left as-is on failure
pub(crate) fn write_text<P: AsRef<Path>>(path: P, contents: &str) -> io::Result<()> {
	let path = path.as_ref();
	let mut file = File::create(path)?;
	file.write_all(contents.as_bytes())?;
	file.flush()?;

	log::info!("Wrote {} bytes to {}", contents.len(), path.display());
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use std::path::PathBuf;

	fn scratch_path(name: &str) -> PathBuf {
		std::env::temp_dir().join(format!("rand-chars-io-{}-{}", std::process::id(), name))
	}

	#[test]
	fn truncates_existing_file() {
		let path = scratch_path("truncate.txt");
		write_text(&path, "a much longer first payload").unwrap();
		write_text(&path, "short").unwrap();

		assert_eq!(fs::read_to_string(&path).unwrap(), "short");
		fs::remove_file(&path).unwrap();
	}

	#[test]
	fn missing_parent_is_an_error() {
		let path = scratch_path("no-such-dir").join("out.txt");
		let err = write_text(&path, "abc").unwrap_err();

		assert_eq!(err.kind(), io::ErrorKind::NotFound);
		assert!(!path.exists());
	}
}
