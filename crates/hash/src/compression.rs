// Copyright 2025 Irreducible Inc.

//! The SHA-2 compression function.

use crate::{
	params::Sha2Params,
	schedule::MessageSchedule,
	word::{big_sigma, Word},
};

/// Choose: bits of `f` where `e` is set, bits of `g` elsewhere.
#[inline(always)]
pub fn ch<W: Word>(e: W, f: W, g: W) -> W {
	(e & f) ^ (!e & g)
}

/// Majority of the three inputs, bit by bit.
#[inline(always)]
pub fn maj<W: Word>(a: W, b: W, c: W) -> W {
	(a & b) ^ (a & c) ^ (b & c)
}

/// Σ0
#[inline(always)]
pub fn big_sigma0<P: Sha2Params>(x: P::Word) -> P::Word {
	big_sigma(x, P::BIG_SIGMA0)
}

/// Σ1
#[inline(always)]
pub fn big_sigma1<P: Sha2Params>(x: P::Word) -> P::Word {
	big_sigma(x, P::BIG_SIGMA1)
}

/// The running chaining value, eight words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashState<W> {
	words: [W; 8],
}

impl<W: Word> HashState<W> {
	pub const fn new(words: [W; 8]) -> Self {
		Self { words }
	}

	pub fn initial<P: Sha2Params<Word = W>>() -> Self {
		Self::new(P::IV)
	}

	pub fn words(&self) -> &[W; 8] {
		&self.words
	}

	/// Adds the registers into the state word by word, modulo the word size.
	pub fn accumulate(mut self, registers: Registers<W>) -> Self {
		for (word, register) in self.words.iter_mut().zip(registers.0) {
			*word = word.wrapping_add(register);
		}
		self
	}
}

/// The working registers `a` through `h` of one compression pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers<W>(pub [W; 8]);

impl<W: Word> Registers<W> {
	pub fn load(state: &HashState<W>) -> Self {
		Self(state.words)
	}

	/// Applies one round with round constant `k` and schedule word `w`.
	#[inline(always)]
	pub fn round<P: Sha2Params<Word = W>>(self, k: W, w: W) -> Self {
		let [a, b, c, d, e, f, g, h] = self.0;

		let t1 = h
			.wrapping_add(big_sigma1::<P>(e))
			.wrapping_add(ch(e, f, g))
			.wrapping_add(k)
			.wrapping_add(w);
		let t2 = big_sigma0::<P>(a).wrapping_add(maj(a, b, c));

		Self([t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g])
	}
}

/// Folds one expanded block into `state`.
pub fn compress<P: Sha2Params>(
	state: HashState<P::Word>,
	schedule: &MessageSchedule<P::Word>,
) -> HashState<P::Word> {
	debug_assert_eq!(schedule.len(), P::rounds());

	let registers = P::K
		.iter()
		.zip(schedule.as_slice())
		.fold(Registers::load(&state), |registers, (&k, &w)| registers.round::<P>(k, w));

	state.accumulate(registers)
}
