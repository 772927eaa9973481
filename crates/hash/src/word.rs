// Copyright 2025 Irreducible Inc.

//! Machine words the SHA-2 engines operate on.

use std::{
	fmt::{Debug, LowerHex},
	ops::{BitAnd, BitXor, Not},
};

/// An unsigned word of fixed width.
///
/// All operations stay within the word width: rotations wrap around the word, shifts drop the
/// bits moved out, and additions are modulo `2^BITS`.
pub trait Word:
	Copy
	+ Default
	+ Eq
	+ Debug
	+ LowerHex
	+ Send
	+ Sync
	+ 'static
	+ BitAnd<Output = Self>
	+ BitXor<Output = Self>
	+ Not<Output = Self>
{
	/// Width of the word in bits.
	const BITS: u32;
	/// Width of the word in bytes.
	const BYTES: usize;

	fn rotr(self, n: u32) -> Self;
	fn rotl(self, n: u32) -> Self;
	fn shr(self, n: u32) -> Self;
	fn wrapping_add(self, rhs: Self) -> Self;

	/// Reads a word from exactly `Self::BYTES` big-endian bytes.
	fn from_be_slice(bytes: &[u8]) -> Self;

	/// Writes the word into exactly `Self::BYTES` bytes, most significant byte first.
	fn write_be_slice(self, out: &mut [u8]);
}

macro_rules! impl_word {
	($ty:ty) => {
		impl Word for $ty {
			const BITS: u32 = <$ty>::BITS;
			const BYTES: usize = std::mem::size_of::<$ty>();

			#[inline(always)]
			fn rotr(self, n: u32) -> Self {
				debug_assert!(n > 0 && n < Self::BITS);
				self.rotate_right(n)
			}

			#[inline(always)]
			fn rotl(self, n: u32) -> Self {
				debug_assert!(n > 0 && n < Self::BITS);
				self.rotate_left(n)
			}

			#[inline(always)]
			fn shr(self, n: u32) -> Self {
				debug_assert!(n > 0 && n < Self::BITS);
				self >> n
			}

			#[inline(always)]
			fn wrapping_add(self, rhs: Self) -> Self {
				<$ty>::wrapping_add(self, rhs)
			}

			#[inline]
			fn from_be_slice(bytes: &[u8]) -> Self {
				debug_assert_eq!(bytes.len(), Self::BYTES);
				bytes
					.iter()
					.fold(0, |acc, &byte| (acc << 8) | Self::from(byte))
			}

			#[inline]
			fn write_be_slice(self, out: &mut [u8]) {
				out.copy_from_slice(&self.to_be_bytes());
			}
		}
	};
}

impl_word!(u32);
impl_word!(u64);

/// `ROTR^r0(x) ⊕ ROTR^r1(x) ⊕ ROTR^r2(x)`, the shape of Σ0 and Σ1.
#[inline(always)]
pub fn big_sigma<W: Word>(x: W, [r0, r1, r2]: [u32; 3]) -> W {
	x.rotr(r0) ^ x.rotr(r1) ^ x.rotr(r2)
}

/// `ROTR^r0(x) ⊕ ROTR^r1(x) ⊕ SHR^s(x)`, the shape of σ0 and σ1.
#[inline(always)]
pub fn small_sigma<W: Word>(x: W, [r0, r1, s]: [u32; 3]) -> W {
	x.rotr(r0) ^ x.rotr(r1) ^ x.shr(s)
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_rotr_u32() {
		assert_eq!(Word::rotr(1u32, 1), 0x8000_0000);
		assert_eq!(Word::rotr(0x0000_00ffu32, 4), 0xf000_000f);
		assert_eq!(Word::rotr(0x8000_0000u32, 31), 0x0000_0001);
	}

	#[test]
	fn test_rotl_u64() {
		assert_eq!(Word::rotl(0x8000_0000_0000_0000u64, 1), 1);
		assert_eq!(Word::rotl(0xf000_0000_0000_000fu64, 4), 0x0000_0000_0000_00ff);
	}

	#[test]
	fn test_shr_drops_low_bits() {
		assert_eq!(Word::shr(0xffff_ffffu32, 31), 1);
		assert_eq!(Word::shr(0xffff_ffff_ffff_ffffu64, 60), 0xf);
		assert_eq!(Word::shr(0x0000_0007u32, 3), 0);
	}

	#[test]
	fn test_wrapping_add_wraps() {
		assert_eq!(Word::wrapping_add(u32::MAX, 2u32), 1);
		assert_eq!(Word::wrapping_add(u64::MAX, 1u64), 0);
	}

	#[test]
	fn test_be_roundtrip_layout() {
		let bytes = [0x61, 0x62, 0x63, 0x80];
		let word = u32::from_be_slice(&bytes);
		assert_eq!(word, 0x6162_6380);

		let mut out = [0u8; 8];
		0x0102_0304_0506_0708u64.write_be_slice(&mut out);
		assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8]);
	}

	#[test]
	fn test_sigma_shapes() {
		// A single set bit lands in one position per term.
		assert_eq!(big_sigma(1u32, [2, 13, 22]), (1 << 30) | (1 << 19) | (1 << 10));
		assert_eq!(small_sigma(1u32, [7, 18, 3]), (1 << 25) | (1 << 14));
		assert_eq!(small_sigma(8u32, [7, 18, 3]), (1 << 28) | (1 << 17) | 1);
	}

	proptest! {
		#[test]
		fn test_rotr_rotl_inverse_u32(x in any::<u32>(), n in 1u32..32) {
			prop_assert_eq!(Word::rotl(Word::rotr(x, n), n), x);
			prop_assert_eq!(Word::rotr(x, n), (x >> n) | (x << (32 - n)));
		}

		#[test]
		fn test_rotr_rotl_inverse_u64(x in any::<u64>(), n in 1u32..64) {
			prop_assert_eq!(Word::rotl(Word::rotr(x, n), n), x);
			prop_assert_eq!(Word::rotr(x, n), (x >> n) | (x << (64 - n)));
		}
	}
}
