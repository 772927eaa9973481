// Copyright 2023 Ulvetanna Inc.

//! SHA-224 and SHA-512 built directly on the FIPS 180-4 compression function.
//!
//! Both variants share one engine, parameterized by [`Sha2Params`]:
//! padding ([`MessageBuffer`]), schedule expansion ([`expand_schedule`]), compression
//! ([`compress`]) and digest extraction ([`extract_digest`]).
//!
//! ```
//! use varsha_hash::{compute, to_hex, Algorithm};
//!
//! let digest = compute(Algorithm::Sha224, b"abc").unwrap();
//! assert_eq!(to_hex(&digest), "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7");
//! ```


pub mod compression;
pub mod consts;
pub mod extract;
pub mod hasher;
pub mod padding;
pub mod params;
pub mod schedule;
pub mod word;

pub use compression::{compress, HashState, Registers};
pub use extract::{extract_digest, Output};
pub use hasher::*;
pub use padding::MessageBuffer;
pub use params::{Sha224, Sha2Params, Sha512};
pub use schedule::{expand_schedule, MessageSchedule};
pub use varsha_utils::formatting::to_hex;
pub use word::Word;
