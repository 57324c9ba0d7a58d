//! Integration tests for the growable byte buffer

use multibulk::ByteBuffer;
use multibulk::FrameError;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_randomized_appends_preserve_content() {
	let mut rng = StdRng::seed_from_u64(42);
	let mut buf = ByteBuffer::with_capacity(1);
	let mut expected = Vec::new();
	let mut capacities = Vec::new();

	for _ in 0..500 {
		let mut chunk = vec![0u8; rng.random_range(0..257)];
		rng.fill(&mut chunk[..]);

		match rng.random_range(0..3) {
			0 => buf.append(&chunk),
			1 => {
				let offset = rng.random_range(0..=chunk.len());
				let length = rng.random_range(0..=chunk.len() - offset);
				buf.append_range(&chunk, offset, length).unwrap();
				chunk = chunk[offset..offset + length].to_vec();
			}
			_ => buf.append_buffer(ByteBuffer::from(chunk.as_slice())),
		}
		expected.extend_from_slice(&chunk);
		capacities.push(buf.capacity());

		assert_eq!(buf.len(), expected.len());
	}

	assert_eq!(buf.as_bytes(), expected.as_slice());
	assert!(buf.capacity() >= buf.len());

	// Several doublings happened along the way
	capacities.dedup();
	assert!(capacities.len() > 5, "capacities: {:?}", capacities);
}

#[test]
fn test_failed_range_is_all_or_nothing() {
	let mut rng = StdRng::seed_from_u64(7);
	let mut buf = ByteBuffer::new();
	buf.append(b"prefix");

	for _ in 0..100 {
		let source = vec![1u8; rng.random_range(0..64)];
		let offset = rng.random_range(0..128);
		let length = rng.random_range(1..128);
		let result = buf.append_range(&source, offset, length);

		if offset + length > source.len() {
			assert_eq!(
				result,
				Err(FrameError::InvalidRange {
					offset,
					length,
					source_len: source.len(),
				})
			);
		} else {
			assert!(result.is_ok());
			buf.clear();
			buf.append(b"prefix");
		}
		assert_eq!(buf.as_bytes(), b"prefix");
	}
}

#[test]
fn test_freeze_exact_length() {
	let mut buf = ByteBuffer::with_capacity(1024);
	buf.append(b"*0\r\n");
	let frozen = buf.freeze();
	assert_eq!(frozen.len(), 4);
	assert_eq!(&frozen[..], b"*0\r\n");
}
