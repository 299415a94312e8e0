//! Security error types and handling.
//!
//! Provides error types for credential resolution.

use std::collections::HashMap;

use crate::utils::ErrorContext;

/// Represents possible errors while resolving credentials
#[derive(Debug)]
pub enum SecurityError {
	/// A secret could not be read from its source
	ResolveError(ErrorContext),
	/// A secret was found but is unusable (empty, invalid header value, ...)
	ValidationError(ErrorContext),
}

impl SecurityError {
	const TARGET: &str = "security";

	/// Creates a new resolve error with source
	pub fn resolve_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ResolveError(
			ErrorContext::new("Resolve Error", msg, metadata)
				.with_source(source)
				.with_target(Self::TARGET),
		)
	}

	/// Creates a new validation error
	pub fn validation_error(
		msg: impl Into<String>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(
			ErrorContext::new("Validation Error", msg, metadata).with_target(Self::TARGET),
		)
	}

	fn context(&self) -> &ErrorContext {
		match self {
			Self::ResolveError(ctx) => ctx,
			Self::ValidationError(ctx) => ctx,
		}
	}
}

impl std::error::Error for SecurityError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		std::error::Error::source(self.context())
	}
}

impl std::fmt::Display for SecurityError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.context().fmt(f)
	}
}
