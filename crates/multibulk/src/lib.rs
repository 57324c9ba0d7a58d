//! # Multibulk - RESP command framing
//!
//! Turns a command name plus its arguments into the exact byte sequence a
//! RESP server expects on the wire: one array header followed by one bulk
//! string per argument.
//!
//! ```text
//! *<argCount>\r\n
//! $<len(arg1)>\r\n
//! <arg1 bytes>\r\n
//! ...
//! ```
//!
//! Framing happens in two phases. Every argument is framed eagerly as soon
//! as it is appended, while the outer array header waits until
//! [`CommandBuilder::build`] is called because only then is the argument
//! count known. The finalized frame is memoized; later calls hand out the
//! same bytes.
//!
//! ## Example
//!
//! ```rust
//! use multibulk::CommandBuilder;
//!
//! let mut cmd = CommandBuilder::new();
//! cmd.append_str("SET").unwrap();
//! cmd.append_str("k").unwrap();
//!
//! let frame = cmd.build();
//! assert_eq!(&frame[..], b"*2\r\n$3\r\nSET\r\n$1\r\nk\r\n");
//! ```

mod buffer;
mod command;
pub mod encoding;
mod error;
mod shared;
mod utils;

pub use buffer::ByteBuffer;
pub use command::CommandBuilder;
pub use error::FrameError;
pub use shared::SharedCommandBuilder;
pub use utils::ARRAY;
pub use utils::BULK_STRING;
pub use utils::CRLF;
pub use utils::array_header_len;
pub use utils::bulk_frame_len;
pub use utils::escape;
