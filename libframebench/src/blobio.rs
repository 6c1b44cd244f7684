use std::{fs::File, io::{Read, Write}, path::{Path, PathBuf}};

use crate::error::Error;

/// Returns the path of the blob file for `index` within `dir`
pub fn blob_path(dir: &Path, index: u64) -> PathBuf {
	dir.join(format!("shared_memory_test_{}", index))
}

/// Writes `data` verbatim to a new or truncated file at `path`, flushing before the handle is
/// released so that a reader opening the path immediately afterwards observes exactly these
/// bytes. The parent directory must already exist
pub fn write_blob(path: &Path, data: &[u8]) -> Result<(), Error> {
	let mut file = File::create(path)?;

	file.write_all(data)?;
	file.flush()?;

	Ok(())
}

/// Reads exactly `len` bytes from the file at `path` into a freshly allocated buffer. A file
/// holding fewer than `len` bytes yields `Error::IncompleteRead` carrying the number of bytes
/// that were available, rather than a zero-padded buffer
pub fn read_blob_exact(path: &Path, len: u64) -> Result<Vec<u8>, Error> {
	let mut file = File::open(path)?;

	let mut buf = vec![0u8; len as usize];
	let mut filled = 0;

	while filled < buf.len() {
		match file.read(&mut buf[filled..])? {
			0 => return Err(Error::IncompleteRead(path.to_path_buf(), len, filled as u64)),
			bytes_read => filled += bytes_read
		}
	}

	Ok(buf)
}
