//! Thread-safe wrapper around [`CommandBuilder`].

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use bytes::Bytes;

use crate::CommandBuilder;
use crate::FrameError;

/// A [`CommandBuilder`] that can be shared between threads, e.g. behind an
/// `Arc`.
///
/// All operations take `&self` and serialize on an internal mutex, so when
/// several threads race the first [`build`](Self::build) exactly one of them
/// assembles the frame and every caller receives the same bytes.
#[derive(Debug, Default)]
pub struct SharedCommandBuilder {
	inner: Mutex<CommandBuilder>,
}

impl SharedCommandBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn append_str(&self, text: &str) -> Result<(), FrameError> {
		self.lock().append_str(text)
	}

	pub fn append_bytes(&self, bytes: &[u8]) -> Result<(), FrameError> {
		self.lock().append_bytes(bytes)
	}

	pub fn append_bytes_range(
		&self,
		source: &[u8],
		offset: usize,
		length: usize,
	) -> Result<(), FrameError> {
		self.lock().append_bytes_range(source, offset, length)
	}

	pub fn build(&self) -> Bytes {
		self.lock().build()
	}

	pub fn argument_count(&self) -> usize {
		self.lock().argument_count()
	}

	pub fn is_finalized(&self) -> bool {
		self.lock().is_finalized()
	}

	pub fn frame(&self) -> Option<Bytes> {
		self.lock().frame().cloned()
	}

	pub fn into_inner(self) -> CommandBuilder {
		self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
	}

	// Builder methods never panic while holding the lock, so a poisoned
	// guard still protects consistent state.
	fn lock(&self) -> MutexGuard<'_, CommandBuilder> {
		self.inner.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

impl From<CommandBuilder> for SharedCommandBuilder {
	fn from(builder: CommandBuilder) -> Self {
		Self {
			inner: Mutex::new(builder),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::sync::Barrier;
	use std::thread;

	use super::*;

	#[test]
	fn test_concurrent_first_build_is_exactly_once() {
		let shared = Arc::new(SharedCommandBuilder::new());
		shared.append_str("SET").unwrap();
		shared.append_str("key").unwrap();
		shared.append_str("value").unwrap();

		let threads = 8;
		let barrier = Arc::new(Barrier::new(threads));
		let handles: Vec<_> = (0..threads)
			.map(|_| {
				let shared = Arc::clone(&shared);
				let barrier = Arc::clone(&barrier);
				thread::spawn(move || {
					barrier.wait();
					shared.build()
				})
			})
			.collect();

		let frames: Vec<Bytes> = handles.into_iter().map(|h| h.join().unwrap()).collect();
		let expected = b"*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n";
		for frame in &frames {
			assert_eq!(&frame[..], expected);
			// One build pass means one allocation shared by every caller
			assert_eq!(frame.as_ptr(), frames[0].as_ptr());
		}
	}

	#[test]
	fn test_concurrent_appends_are_all_counted() {
		let shared = Arc::new(SharedCommandBuilder::new());
		let handles: Vec<_> = (0..4)
			.map(|_| {
				let shared = Arc::clone(&shared);
				thread::spawn(move || {
					for _ in 0..25 {
						shared.append_str("x").unwrap();
					}
				})
			})
			.collect();
		for handle in handles {
			handle.join().unwrap();
		}

		assert_eq!(shared.argument_count(), 100);
		let frame = shared.build();
		assert!(frame.starts_with(b"*100\r\n"));
		assert_eq!(frame.len(), 6 + 100 * b"$1\r\nx\r\n".len());
	}

	#[test]
	fn test_append_after_build_rejected() {
		let shared = SharedCommandBuilder::from(CommandBuilder::new());
		shared.append_str("PING").unwrap();
		let frame = shared.build();

		assert_eq!(shared.append_str("PONG"), Err(FrameError::FinalizedAlready));
		assert!(shared.is_finalized());
		assert_eq!(shared.frame(), Some(frame.clone()));
		assert_eq!(shared.into_inner().build(), frame);
	}
}
