// Copyright 2023-2025 Irreducible Inc.

use std::{fmt, str::FromStr};

use digest::typenum::Unsigned;
use tracing::{instrument, trace};
use varsha_utils::formatting::to_hex;

use crate::{
	compression::{compress, HashState},
	extract::{extract_digest, Output},
	padding::MessageBuffer,
	params::{Sha224, Sha2Params, Sha512},
	schedule::expand_schedule,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
	#[error("{algorithm} cannot hash {len} bytes: the bit length does not fit in {field_bits} bits")]
	InputTooLarge {
		algorithm: &'static str,
		len: u128,
		field_bits: usize,
	},
	#[error("unknown hash algorithm {0:?}")]
	UnknownAlgorithm(String),
}

/// Hashes a whole message with variant `P`.
///
/// The message is padded, then each block is expanded and folded into the running state
/// starting from `P::IV`. Only fails if the message bit length overflows the length field.
#[instrument(skip_all, level = "debug", fields(algorithm = P::NAME, len = message.len()))]
pub fn hash<P: Sha2Params>(message: &[u8]) -> Result<Output<P>, HashError> {
	let buffer = MessageBuffer::pad::<P>(message)?;
	trace!(blocks = buffer.block_count(), "padded message");

	let state = buffer
		.blocks()
		.fold(HashState::initial::<P>(), |state, block| {
			compress::<P>(state, &expand_schedule::<P>(block))
		});

	Ok(extract_digest::<P>(&state))
}

/// The hash variants available at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
	Sha224,
	Sha512,
}

impl Algorithm {
	pub const ALL: [Algorithm; 2] = [Algorithm::Sha224, Algorithm::Sha512];

	pub const fn name(self) -> &'static str {
		match self {
			Self::Sha224 => Sha224::NAME,
			Self::Sha512 => Sha512::NAME,
		}
	}

	/// Digest length in bytes.
	pub const fn digest_len(self) -> usize {
		match self {
			Self::Sha224 => <<Sha224 as Sha2Params>::OutputSize as Unsigned>::USIZE,
			Self::Sha512 => <<Sha512 as Sha2Params>::OutputSize as Unsigned>::USIZE,
		}
	}

	/// Block length in bytes.
	pub const fn block_len(self) -> usize {
		match self {
			Self::Sha224 => Sha224::BLOCK_LEN,
			Self::Sha512 => Sha512::BLOCK_LEN,
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Algorithm {
	type Err = HashError;

	/// Accepts `SHA-224`, `sha224`, `sha_224` and so on, case-insensitively.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s
			.chars()
			.filter(|c| !matches!(c, '-' | '_'))
			.collect::<String>()
			.to_ascii_lowercase();
		match normalized.as_str() {
			"sha224" => Ok(Self::Sha224),
			"sha512" => Ok(Self::Sha512),
			_ => Err(HashError::UnknownAlgorithm(s.to_string())),
		}
	}
}

/// Hashes `message` with the variant selected at runtime.
pub fn compute(algorithm: Algorithm, message: &[u8]) -> Result<Vec<u8>, HashError> {
	let digest = match algorithm {
		Algorithm::Sha224 => hash::<Sha224>(message)?.to_vec(),
		Algorithm::Sha512 => hash::<Sha512>(message)?.to_vec(),
	};
	Ok(digest)
}

/// Hashes `message` and renders the digest as lowercase hex.
pub fn hash_hex(algorithm: Algorithm, message: impl AsRef<[u8]>) -> Result<String, HashError> {
	compute(algorithm, message.as_ref()).map(to_hex)
}
