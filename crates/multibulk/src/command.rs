//! Two-phase Multi-Bulk command builder.

use std::collections::VecDeque;
use std::fmt;

use bytes::Bytes;
use log::debug;
use log::trace;

use crate::ByteBuffer;
use crate::FrameError;
use crate::encoding;
use crate::utils::ARRAY;
use crate::utils::BULK_STRING;
use crate::utils::CRLF;
use crate::utils::array_header_len;
use crate::utils::bulk_frame_len;
use crate::utils::encode_length;
use crate::utils::escape;

#[derive(Debug)]
enum State {
	/// Arguments are framed on append and queued in argument order
	Building { pending: VecDeque<ByteBuffer> },
	/// Terminal: the frame never changes again
	Finalized { frame: Bytes, arguments: usize },
}

/// Accumulates command arguments and assembles them into one Multi-Bulk
/// frame.
///
/// Each `append_*` call frames its argument immediately as
/// `$<len>\r\n<payload>\r\n`. The array header `*<count>\r\n` can only be
/// written once every argument is known, so it is deferred to
/// [`build`](Self::build), which runs exactly once and memoizes the result.
/// Any append after that fails with [`FrameError::FinalizedAlready`].
///
/// Empty arguments are dropped rather than framed as `$0\r\n\r\n`; they do
/// not count toward the argument total.
#[derive(Debug)]
pub struct CommandBuilder {
	state: State,
}

impl Default for CommandBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl CommandBuilder {
	pub fn new() -> Self {
		Self {
			state: State::Building {
				pending: VecDeque::with_capacity(4),
			},
		}
	}

	/// Append a text argument, encoded as UTF-8.
	pub fn append_str(&mut self, text: &str) -> Result<(), FrameError> {
		self.append_bytes(encoding::encode(text))
	}

	/// Append a binary argument.
	pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<(), FrameError> {
		self.append_bytes_range(bytes, 0, bytes.len())
	}

	/// Append `source[offset..offset + length]` as one argument.
	///
	/// Fails with [`FrameError::InvalidRange`] when the range does not fit
	/// in `source`; the builder is left exactly as it was.
	pub fn append_bytes_range(
		&mut self,
		source: &[u8],
		offset: usize,
		length: usize,
	) -> Result<(), FrameError> {
		let pending = self.pending_mut()?;
		if length == 0 {
			trace!("Dropping empty argument at position {}", pending.len());
			return Ok(());
		}
		if let Err(e) = FrameError::check_range(source.len(), offset, length) {
			debug!("Rejecting argument at position {}: {}", pending.len(), e);
			return Err(e);
		}

		let mut frame = ByteBuffer::with_capacity(bulk_frame_len(length));
		encode_length(&mut frame, BULK_STRING, length);
		frame.append(&source[offset..offset + length]);
		frame.append(CRLF);

		pending.push_back(frame);
		Ok(())
	}

	/// Append every item of `args` in order, stopping at the first failure.
	pub fn append_all<I>(&mut self, args: I) -> Result<(), FrameError>
	where
		I: IntoIterator,
		I::Item: AsRef<[u8]>,
	{
		for arg in args {
			self.append_bytes(arg.as_ref())?;
		}
		Ok(())
	}

	/// Finalize on first call and return the frame.
	///
	/// Every call returns the same bytes; the returned [`Bytes`] share one
	/// allocation.
	pub fn build(&mut self) -> Bytes {
		let (frame, arguments) = match &mut self.state {
			State::Finalized { frame, .. } => return frame.clone(),
			State::Building { pending } => assemble(std::mem::take(pending)),
		};

		debug!(
			"Finalized command frame: {} arguments, {} bytes",
			arguments,
			frame.len()
		);
		self.state = State::Finalized {
			frame: frame.clone(),
			arguments,
		};
		frame
	}

	/// Number of arguments appended so far (frozen once finalized).
	pub fn argument_count(&self) -> usize {
		match &self.state {
			State::Building { pending } => pending.len(),
			State::Finalized { arguments, .. } => *arguments,
		}
	}

	pub fn is_finalized(&self) -> bool {
		matches!(self.state, State::Finalized { .. })
	}

	/// The finalized frame, without triggering a build.
	pub fn frame(&self) -> Option<&Bytes> {
		match &self.state {
			State::Building { .. } => None,
			State::Finalized { frame, .. } => Some(frame),
		}
	}

	fn pending_mut(&mut self) -> Result<&mut VecDeque<ByteBuffer>, FrameError> {
		match &mut self.state {
			State::Building { pending } => Ok(pending),
			State::Finalized { .. } => {
				debug!("Rejecting append to finalized command frame");
				Err(FrameError::FinalizedAlready)
			}
		}
	}
}

/// Write the array header and drain the pending arguments behind it.
fn assemble(pending: VecDeque<ByteBuffer>) -> (Bytes, usize) {
	let arguments = pending.len();
	let total = array_header_len(arguments) + pending.iter().map(ByteBuffer::len).sum::<usize>();

	let mut buf = ByteBuffer::with_capacity(total);
	encode_length(&mut buf, ARRAY, arguments);
	for arg in pending {
		buf.append_buffer(arg);
	}

	(buf.freeze(), arguments)
}

impl fmt::Display for CommandBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.frame() {
			Some(frame) => write!(f, "CommandBuilder[command={}]", escape(frame)),
			None => write!(
				f,
				"CommandBuilder[command=[call build() first to generate the command]]"
			),
		}
	}
}
