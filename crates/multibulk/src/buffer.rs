//! Growable, append-only byte buffer.

use std::fmt;

use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::FrameError;

/// Capacity used by [`ByteBuffer::new`] and the floor for any regrowth
const MIN_CAPACITY: usize = 32;

/// An append-only byte buffer that grows geometrically.
///
/// When an append does not fit, capacity is raised to at least double the
/// current capacity (or the required size, whichever is larger) so a run of
/// appends costs amortized O(1) per byte. Reads always see exactly the
/// logical bytes, never spare capacity.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
	inner: BytesMut,
}

impl ByteBuffer {
	pub fn new() -> Self {
		Self::with_capacity(MIN_CAPACITY)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			inner: BytesMut::with_capacity(capacity),
		}
	}

	/// Append `bytes` to the end. Empty input is a no-op.
	pub fn append(&mut self, bytes: &[u8]) {
		if bytes.is_empty() {
			return;
		}
		self.grow_for(bytes.len());
		self.inner.put_slice(bytes);
	}

	/// Append `source[offset..offset + length]`.
	///
	/// A zero `length` is a no-op. An out-of-bounds range fails with
	/// [`FrameError::InvalidRange`] and leaves the buffer untouched.
	pub fn append_range(
		&mut self,
		source: &[u8],
		offset: usize,
		length: usize,
	) -> Result<(), FrameError> {
		if length == 0 {
			return Ok(());
		}
		FrameError::check_range(source.len(), offset, length)?;
		self.append(&source[offset..offset + length]);
		Ok(())
	}

	/// Append the whole logical content of `other`, consuming it.
	pub fn append_buffer(&mut self, other: ByteBuffer) {
		self.append(&other.inner);
	}

	#[inline]
	pub fn append_u8(&mut self, byte: u8) {
		self.grow_for(1);
		self.inner.put_u8(byte);
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	#[inline]
	pub fn capacity(&self) -> usize {
		self.inner.capacity()
	}

	/// View of the logical bytes, sized exactly to [`len`](Self::len).
	#[inline]
	pub fn as_bytes(&self) -> &[u8] {
		&self.inner
	}

	/// Drop the content but keep the allocation.
	pub fn clear(&mut self) {
		self.inner.clear();
	}

	/// Convert into an immutable, cheaply cloneable [`Bytes`].
	pub fn freeze(self) -> Bytes {
		self.inner.freeze()
	}

	fn grow_for(&mut self, additional: usize) {
		let len = self.inner.len();
		let required = len.saturating_add(additional);
		let capacity = self.inner.capacity();
		if required <= capacity {
			return;
		}

		let target = required
			.max(capacity.saturating_mul(2))
			.max(MIN_CAPACITY);
		self.inner.reserve(target - len);
	}
}

impl AsRef<[u8]> for ByteBuffer {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl From<&[u8]> for ByteBuffer {
	fn from(bytes: &[u8]) -> Self {
		let mut buf = ByteBuffer::with_capacity(bytes.len());
		buf.append(bytes);
		buf
	}
}

impl From<ByteBuffer> for Bytes {
	fn from(buf: ByteBuffer) -> Self {
		buf.freeze()
	}
}

impl fmt::Debug for ByteBuffer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ByteBuffer")
			.field("len", &self.len())
			.field("capacity", &self.capacity())
			.field("bytes", &format_args!("{}", crate::utils::escape(self.as_bytes())))
			.finish()
	}
}
