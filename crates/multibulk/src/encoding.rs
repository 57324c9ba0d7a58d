//! Text to bytes conversion.
//!
//! Arguments supplied as text are always encoded as UTF-8, independent of
//! platform or locale, so a given string always frames to the same length.

use std::borrow::Cow;

use crate::FrameError;

/// The one text encoding used for every text argument
pub const TEXT_ENCODING: &str = "UTF-8";

/// Encode text as UTF-8 bytes.
#[inline]
pub fn encode(text: &str) -> &[u8] {
	text.as_bytes()
}

/// Decode UTF-8 bytes back into text.
#[inline]
pub fn decode(bytes: &[u8]) -> Result<&str, FrameError> {
	Ok(std::str::from_utf8(bytes)?)
}

/// Decode UTF-8 bytes, replacing invalid sequences with U+FFFD.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
	String::from_utf8_lossy(bytes)
}
