//! Error types for command framing.

use thiserror::Error;

/// Errors that can occur while framing a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
	/// An explicit offset/length pair does not fit inside the source bytes
	#[error(
		"Invalid range: offset [{offset}] + length [{length}] must be <= source length [{source_len}]"
	)]
	InvalidRange {
		offset: usize,
		length: usize,
		source_len: usize,
	},

	/// The command frame has already been built and can no longer change
	#[error("Command frame already finalized")]
	FinalizedAlready,

	/// Bytes could not be decoded as UTF-8 text
	#[error("UTF-8 error: {0}")]
	Utf8Error(String),
}

impl From<std::str::Utf8Error> for FrameError {
	fn from(e: std::str::Utf8Error) -> Self {
		FrameError::Utf8Error(e.to_string())
	}
}

impl FrameError {
	/// Validate that `offset..offset + length` lies inside a source of
	/// `source_len` bytes.
	pub(crate) fn check_range(
		source_len: usize,
		offset: usize,
		length: usize,
	) -> Result<(), FrameError> {
		match offset.checked_add(length) {
			Some(end) if end <= source_len => Ok(()),
			_ => Err(FrameError::InvalidRange {
				offset,
				length,
				source_len,
			}),
		}
	}
}
