//! Configuration error types.
//!
//! This module defines the error types that can occur during configuration
//! loading and validation.

use std::collections::HashMap;

use crate::utils::ErrorContext;

/// Errors that can occur during configuration operations
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// Configuration validation failed
	ValidationError(ErrorContext),

	/// Failed to parse configuration file or variable
	ParseError(ErrorContext),

	/// File system error during configuration loading
	FileError(ErrorContext),
}

impl ConfigError {
	const TARGET: &str = "config::error";

	/// Create a new validation error
	pub fn validation_error(
		msg: impl Into<String>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(
			ErrorContext::new("Validation Error", msg, metadata).with_target(Self::TARGET),
		)
	}

	/// Create a new validation error with source
	pub fn validation_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(
			ErrorContext::new("Validation Error", msg, metadata)
				.with_source(source)
				.with_target(Self::TARGET),
		)
	}

	/// Create a new parse error with source
	pub fn parse_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ParseError(
			ErrorContext::new("Parse Error", msg, metadata)
				.with_source(source)
				.with_target(Self::TARGET),
		)
	}

	/// Create a new file error with source
	pub fn file_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::FileError(
			ErrorContext::new("File Error", msg, metadata)
				.with_source(source)
				.with_target(Self::TARGET),
		)
	}

	fn context(&self) -> &ErrorContext {
		match self {
			Self::ValidationError(ctx) => ctx,
			Self::ParseError(ctx) => ctx,
			Self::FileError(ctx) => ctx,
		}
	}
}

impl std::error::Error for ConfigError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		std::error::Error::source(self.context())
	}
}

impl std::fmt::Display for ConfigError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.context().fmt(f)
	}
}
