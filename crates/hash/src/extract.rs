// Copyright 2025 Irreducible Inc.

use digest::generic_array::GenericArray;

use crate::{compression::HashState, params::Sha2Params, word::Word};

/// Digest bytes of variant `P`.
pub type Output<P> = GenericArray<u8, <P as Sha2Params>::OutputSize>;

/// Serializes the leading `P::OUTPUT_WORDS` words of the final state big-endian.
pub fn extract_digest<P: Sha2Params>(state: &HashState<P::Word>) -> Output<P> {
	let mut out = Output::<P>::default();
	for (word, bytes) in state
		.words()
		.iter()
		.take(P::OUTPUT_WORDS)
		.zip(out.chunks_exact_mut(<P::Word as Word>::BYTES))
	{
		word.write_be_slice(bytes);
	}
	out
}
