//! Logging utilities for consumers of the crate.
//!
//! The library itself only emits `tracing` events. Binaries and tests embedding it
//! can call [`setup_logging`] to install a `tracing_subscriber` registry that honours
//! `RUST_LOG` and falls back to the given default directive.
use tracing::Subscriber;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default filter directive used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Setup logging with the default `info` filter
pub fn setup_logging() {
	setup_logging_with_filter(DEFAULT_LOG_FILTER);
}

/// Setup logging, using `default_filter` when `RUST_LOG` is absent or invalid
///
/// Installing a subscriber twice is not an error: the second call is ignored.
pub fn setup_logging_with_filter(default_filter: &str) {
	// Try to set the subscriber, but don't panic if it fails
	let _ = build_subscriber(default_filter).try_init();
}

/// Builds the compact stderr subscriber without installing it
pub fn build_subscriber(default_filter: &str) -> impl Subscriber + Send + Sync + 'static {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

	tracing_subscriber::registry().with(filter).with(
		fmt::layer()
			.with_writer(std::io::stderr)
			.event_format(
				fmt::format()
					.with_level(true)
					.with_target(true)
					.with_thread_ids(false)
					.with_thread_names(false)
					.with_ansi(true)
					.compact(),
			)
			.fmt_fields(fmt::format::PrettyFields::new()),
	)
}
