// Copyright 2025 Irreducible Inc.

//! Merkle–Damgård message padding.

use std::slice::ChunksExact;

use crate::{hasher::HashError, params::Sha2Params};

/// Message bit length as it will be written into the length field.
///
/// Fails if the bit length does not fit into `P::LENGTH_FIELD_LEN` bytes.
pub fn bit_length<P: Sha2Params>(message_len: u128) -> Result<u128, HashError> {
	let field_bits = 8 * P::LENGTH_FIELD_LEN;
	let too_large = || HashError::InputTooLarge {
		algorithm: P::NAME,
		len: message_len,
		field_bits,
	};

	let bits = message_len.checked_mul(8).ok_or_else(too_large)?;
	if field_bits < u128::BITS as usize && bits >> field_bits != 0 {
		return Err(too_large());
	}
	Ok(bits)
}

/// Length in bytes of the padded message for a message of `message_len` bytes.
pub fn padded_len<P: Sha2Params>(message_len: usize) -> usize {
	// One marker byte and the length field must fit after the message.
	let min_len = message_len + 1 + P::LENGTH_FIELD_LEN;
	min_len.div_ceil(P::BLOCK_LEN) * P::BLOCK_LEN
}

/// A message followed by its padding: a `0x80` marker, zero bytes, and the big-endian bit length
/// of the original message.
///
/// Invariant: the length is a non-zero multiple of the block length it was padded for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBuffer {
	bytes: Vec<u8>,
	block_len: usize,
}

impl MessageBuffer {
	pub fn pad<P: Sha2Params>(message: &[u8]) -> Result<Self, HashError> {
		let bits = bit_length::<P>(message.len() as u128)?;
		let total_len = padded_len::<P>(message.len());

		let mut bytes = Vec::with_capacity(total_len);
		bytes.extend_from_slice(message);
		bytes.push(0x80);
		bytes.resize(total_len - P::LENGTH_FIELD_LEN, 0);
		bytes.extend_from_slice(&bits.to_be_bytes()[16 - P::LENGTH_FIELD_LEN..]);
		debug_assert_eq!(bytes.len() % P::BLOCK_LEN, 0);

		Ok(Self {
			bytes,
			block_len: P::BLOCK_LEN,
		})
	}

	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	pub fn block_count(&self) -> usize {
		self.bytes.len() / self.block_len
	}

	pub fn blocks(&self) -> ChunksExact<'_, u8> {
		self.bytes.chunks_exact(self.block_len)
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;

	use super::*;
	use crate::params::{Sha224, Sha512};

	#[test]
	fn test_pad_empty() {
		let buffer = MessageBuffer::pad::<Sha224>(b"").unwrap();
		let mut expected = [0u8; 64];
		expected[0] = 0x80;
		assert_eq!(buffer.as_bytes(), expected);
		assert_eq!(buffer.block_count(), 1);
	}

	#[test]
	fn test_pad_abc_sha224() {
		let buffer = MessageBuffer::pad::<Sha224>(b"abc").unwrap();
		let bytes = buffer.as_bytes();
		assert_eq!(bytes.len(), 64);
		assert_eq!(&bytes[..4], &[0x61, 0x62, 0x63, 0x80]);
		assert!(bytes[4..56].iter().all(|&b| b == 0));
		assert_eq!(&bytes[56..], &24u64.to_be_bytes());
	}

	#[test]
	fn test_pad_abc_sha512() {
		let buffer = MessageBuffer::pad::<Sha512>(b"abc").unwrap();
		let bytes = buffer.as_bytes();
		assert_eq!(bytes.len(), 128);
		assert_eq!(&bytes[..4], &[0x61, 0x62, 0x63, 0x80]);
		assert!(bytes[4..112].iter().all(|&b| b == 0));
		assert_eq!(&bytes[112..], &24u128.to_be_bytes());
	}

	#[test]
	fn test_block_boundary_sha224() {
		// 55 bytes leave room for the marker and the 8-byte length field.
		assert_eq!(padded_len::<Sha224>(55), 64);
		// From 56 bytes on, the length field spills into a second block.
		for len in 56..=64 {
			assert_eq!(padded_len::<Sha224>(len), 128, "len = {len}");
		}
		assert_eq!(padded_len::<Sha224>(63), 128);
		assert_eq!(padded_len::<Sha224>(64 + 55), 128);
		assert_eq!(padded_len::<Sha224>(64 + 63), 192);
	}

	#[test]
	fn test_block_boundary_sha512() {
		assert_eq!(padded_len::<Sha512>(111), 128);
		for len in 112..=128 {
			assert_eq!(padded_len::<Sha512>(len), 256, "len = {len}");
		}
		assert_eq!(padded_len::<Sha512>(127), 256);
	}

	#[test]
	fn test_padded_len_is_block_multiple() {
		for len in 0..600 {
			let buffer = MessageBuffer::pad::<Sha224>(&vec![0xa5; len]).unwrap();
			assert_eq!(buffer.len(), padded_len::<Sha224>(len));
			assert_eq!(buffer.len() % 64, 0);
			assert!(buffer.len() - len > Sha224::LENGTH_FIELD_LEN);
			assert!(buffer.len() - len <= 64 + Sha224::LENGTH_FIELD_LEN);

			let buffer = MessageBuffer::pad::<Sha512>(&vec![0xa5; len]).unwrap();
			assert_eq!(buffer.len() % 128, 0);
			assert_eq!(buffer.as_bytes()[len], 0x80);
		}
	}

	#[test]
	fn test_bit_length_limits_sha224() {
		let max_len = (1u128 << 61) - 1;
		assert_eq!(bit_length::<Sha224>(max_len).unwrap(), (1u128 << 64) - 8);
		assert_matches!(
			bit_length::<Sha224>(1 << 61),
			Err(HashError::InputTooLarge {
				algorithm: "SHA-224",
				field_bits: 64,
				..
			})
		);
	}

	#[test]
	fn test_bit_length_limits_sha512() {
		let max_len = (1u128 << 125) - 1;
		assert_eq!(bit_length::<Sha512>(max_len).unwrap(), u128::MAX - 7);
		assert_matches!(
			bit_length::<Sha512>(1 << 125),
			Err(HashError::InputTooLarge {
				field_bits: 128,
				..
			})
		);
	}
}
