// Copyright 2023 Ulvetanna Inc.

/// Installs a global subscriber printing events to stderr.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. Calling this more than once is a
/// no-op.
pub fn init_tracing() {
	use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_init_tracing_twice() {
		init_tracing();
		init_tracing();
		tracing::info!("subscriber installed");
	}
}
