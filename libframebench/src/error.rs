use std::{fmt::Display, io, path::PathBuf};

macro_rules! impl_from_for_variant {
	($variant: path, $contained_type: ty) => {
		impl From<$contained_type> for Error {
			fn from(value: $contained_type) -> Self {
				$variant(value)
			}
		}
	};
}

#[derive(Debug)]
pub enum Error {
	ConfigValidationError(String),
	IoError(io::Error),
	/// A blob file held fewer bytes than the frame size it was expected to hold - carries the
	/// path, the expected byte count and the number of bytes that were actually available
	IncompleteRead(PathBuf, u64, u64),
}

impl Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", match self {
			Error::ConfigValidationError(msg) => msg.to_string(),
			Error::IoError(e) => e.to_string(),
			Error::IncompleteRead(path, expected, got) => format!("Expected {} bytes from \"{}\" but only {} were available", expected, path.display(), got),
		})
	}
}

impl_from_for_variant!(Error::IoError, io::Error);
