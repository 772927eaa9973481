// Copyright 2025 Irreducible Inc.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use varsha_hash::{compute, to_hex, Algorithm};
use varsha_utils::tracing::init_tracing;

#[derive(Debug, Parser)]
struct Args {
	/// Text to hash, as UTF-8 bytes.
	#[arg(default_value = "Hello World", conflicts_with = "file")]
	message: String,
	/// Hash the contents of this file instead of the message.
	#[arg(short, long)]
	file: Option<PathBuf>,
	/// Algorithms to run; all of them when omitted.
	#[arg(short, long)]
	algorithm: Vec<Algorithm>,
}

fn main() -> Result<()> {
	init_tracing();

	let args = Args::parse();
	let input = match &args.file {
		Some(path) => {
			fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
		}
		None => args.message.into_bytes(),
	};
	let algorithms = if args.algorithm.is_empty() {
		Algorithm::ALL.to_vec()
	} else {
		args.algorithm
	};

	tracing::info!(len = input.len(), "hashing input");
	for algorithm in algorithms {
		let digest = compute(algorithm, &input)?;
		println!("{algorithm}: {}", to_hex(digest));
	}

	Ok(())
}
