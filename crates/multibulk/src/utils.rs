//! Protocol constants and frame sizing helpers.

use crate::ByteBuffer;

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

/// Type marker for a bulk string element
pub const BULK_STRING: u8 = b'$';

/// Type marker for the outer Multi-Bulk array
pub const ARRAY: u8 = b'*';

/// Number of ASCII digits needed to render `n` in decimal
#[inline]
pub(crate) fn decimal_len(n: usize) -> usize {
	n.checked_ilog10().map_or(1, |digits| digits as usize + 1)
}

/// Exact size of a bulk frame carrying `payload_len` bytes:
/// `$<len>\r\n<payload>\r\n`
#[inline]
pub fn bulk_frame_len(payload_len: usize) -> usize {
	1 + decimal_len(payload_len) + CRLF.len() + payload_len + CRLF.len()
}

/// Exact size of the array header announcing `count` elements: `*<count>\r\n`
#[inline]
pub fn array_header_len(count: usize) -> usize {
	1 + decimal_len(count) + CRLF.len()
}

/// Write `<marker><length>\r\n`
#[inline]
pub(crate) fn encode_length(buf: &mut ByteBuffer, marker: u8, length: usize) {
	buf.append_u8(marker);
	buf.append(length.to_string().as_bytes());
	buf.append(CRLF);
}

/// Render bytes for humans, escaping CR, LF and anything non-printable
pub fn escape(bytes: &[u8]) -> String {
	bytes
		.iter()
		.flat_map(|b| std::ascii::escape_default(*b))
		.map(char::from)
		.collect()
}
