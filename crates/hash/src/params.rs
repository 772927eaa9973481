// Copyright 2025 Irreducible Inc.

//! Per-variant configuration of the generic SHA-2 engine.

use digest::{
	generic_array::ArrayLength,
	typenum::{U28, U64},
};

use crate::{
	consts::{SHA224_IV, SHA224_K, SHA512_IV, SHA512_K},
	word::Word,
};

/// Everything that distinguishes one SHA-2 variant from another.
///
/// The engine in this crate is written once against this trait. A variant fixes the word type,
/// the rotate amounts of the four mixing functions, the round constant table, the initial hash
/// value and how many state words make up the digest.
pub trait Sha2Params {
	type Word: Word;
	/// Digest length in bytes, as a type-level integer.
	type OutputSize: ArrayLength<u8>;

	const NAME: &'static str;
	/// Block length in bytes. Always sixteen words.
	const BLOCK_LEN: usize = 16 * <Self::Word as Word>::BYTES;
	/// Length in bytes of the big-endian message bit-length appended by the padding.
	const LENGTH_FIELD_LEN: usize = 2 * <Self::Word as Word>::BYTES;
	/// Number of leading state words emitted as the digest.
	const OUTPUT_WORDS: usize;

	const IV: [Self::Word; 8];
	/// Round constants, one per round.
	const K: &'static [Self::Word];

	/// Rotate amounts of Σ0.
	const BIG_SIGMA0: [u32; 3];
	/// Rotate amounts of Σ1.
	const BIG_SIGMA1: [u32; 3];
	/// Two rotate amounts and a shift amount of σ0.
	const SMALL_SIGMA0: [u32; 3];
	/// Two rotate amounts and a shift amount of σ1.
	const SMALL_SIGMA1: [u32; 3];

	/// Number of compression rounds, equal to the length of the schedule.
	fn rounds() -> usize {
		Self::K.len()
	}
}

/// SHA-224: 32-bit words, 64 rounds, digest truncated to 7 words.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha224;

impl Sha2Params for Sha224 {
	type Word = u32;
	type OutputSize = U28;

	const NAME: &'static str = "SHA-224";
	const OUTPUT_WORDS: usize = 7;

	const IV: [u32; 8] = SHA224_IV;
	const K: &'static [u32] = &SHA224_K;

	const BIG_SIGMA0: [u32; 3] = [2, 13, 22];
	const BIG_SIGMA1: [u32; 3] = [6, 11, 25];
	const SMALL_SIGMA0: [u32; 3] = [7, 18, 3];
	const SMALL_SIGMA1: [u32; 3] = [17, 19, 10];
}

/// SHA-512: 64-bit words, 80 rounds, full 8-word digest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha512;

impl Sha2Params for Sha512 {
	type Word = u64;
	type OutputSize = U64;

	const NAME: &'static str = "SHA-512";
	const OUTPUT_WORDS: usize = 8;

	const IV: [u64; 8] = SHA512_IV;
	const K: &'static [u64] = &SHA512_K;

	const BIG_SIGMA0: [u32; 3] = [28, 34, 39];
	const BIG_SIGMA1: [u32; 3] = [14, 18, 41];
	const SMALL_SIGMA0: [u32; 3] = [1, 8, 7];
	const SMALL_SIGMA1: [u32; 3] = [19, 61, 6];
}
