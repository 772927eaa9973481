// Copyright 2025 Irreducible Inc.

//! Message schedule expansion.

use std::ops::Index;

use crate::{
	params::Sha2Params,
	word::{small_sigma, Word},
};

/// Longest schedule of any supported variant.
pub const MAX_ROUNDS: usize = 80;

/// The per-round message words of a single block.
///
/// The first 16 words are the block itself read big-endian, the rest follow the σ0/σ1
/// recurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSchedule<W> {
	words: [W; MAX_ROUNDS],
	len: usize,
}

impl<W: Word> MessageSchedule<W> {
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn as_slice(&self) -> &[W] {
		&self.words[..self.len]
	}
}

impl<W: Word> Index<usize> for MessageSchedule<W> {
	type Output = W;

	fn index(&self, index: usize) -> &W {
		&self.as_slice()[index]
	}
}

/// σ0
#[inline(always)]
pub fn small_sigma0<P: Sha2Params>(x: P::Word) -> P::Word {
	small_sigma(x, P::SMALL_SIGMA0)
}

/// σ1
#[inline(always)]
pub fn small_sigma1<P: Sha2Params>(x: P::Word) -> P::Word {
	small_sigma(x, P::SMALL_SIGMA1)
}

/// One step of the recurrence: `w[i] = w[i-16] + σ0(w[i-15]) + w[i-7] + σ1(w[i-2])`.
#[inline(always)]
pub fn schedule_word<P: Sha2Params>(
	w_16: P::Word,
	w_15: P::Word,
	w_7: P::Word,
	w_2: P::Word,
) -> P::Word {
	w_16.wrapping_add(small_sigma0::<P>(w_15))
		.wrapping_add(w_7)
		.wrapping_add(small_sigma1::<P>(w_2))
}

/// Expands one block into the full schedule of `P::rounds()` words.
///
/// `block` must be exactly `P::BLOCK_LEN` bytes long.
pub fn expand_schedule<P: Sha2Params>(block: &[u8]) -> MessageSchedule<P::Word> {
	debug_assert_eq!(block.len(), P::BLOCK_LEN);

	let rounds = P::rounds();
	let mut words = [<P::Word as Default>::default(); MAX_ROUNDS];
	for (word, bytes) in words
		.iter_mut()
		.zip(block.chunks_exact(<P::Word as Word>::BYTES))
	{
		*word = <P::Word as Word>::from_be_slice(bytes);
	}
	for i in 16..rounds {
		words[i] = schedule_word::<P>(words[i - 16], words[i - 15], words[i - 7], words[i - 2]);
	}

	MessageSchedule { words, len: rounds }
}
