//! Error handling utilities for the crate.
//!
//! This module provides a structured approach to error handling with context and metadata.
//! The primary type is [`ErrorContext`], which wraps errors with additional information
//! such as the error type, timestamps, trace IDs, and custom metadata. Domain error
//! enums (transport, configuration, security) wrap one `ErrorContext` per variant.
//!
//! # Examples
//!
//! ```
//! use cloudflare_security::utils::ErrorContext;
//!
//! let error = ErrorContext::new("Request Error", "Zone lookup failed", None)
//!     .with_metadata("zone_id", "023e105f4ecef8ad9ca31a8372d0c353")
//!     .with_metadata("status", "404");
//!
//! assert_eq!(
//!     error.format_with_metadata(),
//!     "Zone lookup failed [status=404, zone_id=023e105f4ecef8ad9ca31a8372d0c353]"
//! );
//! ```

use chrono::Utc;
use std::{collections::HashMap, fmt};
use uuid::Uuid;

/// A context wrapper for errors with additional metadata.
///
/// Each error context includes:
///
/// - A short error type label (e.g. `"Connection Error"`)
/// - A descriptive message
/// - An optional source error
/// - Optional key-value metadata
/// - An optional tracing target naming the subsystem that raised it
/// - A timestamp (automatically generated)
/// - A unique trace ID (automatically generated)
#[derive(Debug)]
pub struct ErrorContext {
	/// Short label for the kind of error
	pub error_type: String,
	/// The error message
	pub message: String,
	/// The source error that caused this error
	pub source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
	/// Additional metadata about the error
	pub metadata: Option<HashMap<String, String>>,
	/// Subsystem that raised the error
	pub target: Option<String>,
	/// The timestamp of the error in RFC 3339 format
	pub timestamp: String,
	/// The unique identifier for the error (UUID v4)
	pub trace_id: String,
}

impl ErrorContext {
	/// Creates a new error context with the given type, message and metadata.
	///
	/// # Arguments
	///
	/// * `error_type` - Short label for the kind of error
	/// * `message` - A descriptive error message
	/// * `metadata` - Optional key-value pairs providing additional context
	pub fn new(
		error_type: impl Into<String>,
		message: impl Into<String>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self {
			error_type: error_type.into(),
			message: message.into(),
			source: None,
			metadata,
			target: None,
			timestamp: Utc::now().to_rfc3339(),
			trace_id: Uuid::new_v4().to_string(),
		}
	}

	/// Attaches the error that caused this one.
	pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
		self.source = Some(Box::new(source));
		self
	}

	/// Sets the subsystem that raised the error.
	pub fn with_target(mut self, target: impl Into<String>) -> Self {
		self.target = Some(target.into());
		self
	}

	/// Adds a single key-value metadata pair to the error context.
	///
	/// This method creates the metadata HashMap if it doesn't already exist.
	pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		let metadata = self.metadata.get_or_insert_with(HashMap::new);
		metadata.insert(key.into(), value.into());
		self
	}

	/// Formats the error message with its metadata appended in a readable format.
	///
	/// The format is: `"message [key1=value1, key2=value2, ...]"`.
	/// Metadata keys are sorted alphabetically for consistent output.
	pub fn format_with_metadata(&self) -> String {
		let mut result = self.message.clone();

		if let Some(metadata) = &self.metadata {
			let mut keys: Vec<_> = metadata.keys().collect();
			keys.sort();

			let parts: Vec<String> = keys
				.into_iter()
				.filter_map(|key| metadata.get(key).map(|value| format!("{}={}", key, value)))
				.collect();

			if !parts.is_empty() {
				result.push_str(&format!(" [{}]", parts.join(", ")));
			}
		}

		result
	}
}

impl fmt::Display for ErrorContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		// Causes are exposed through `source()`, see `format_error_chain`
		f.write_str(&self.format_with_metadata())
	}
}

impl std::error::Error for ErrorContext {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		self.source
			.as_deref()
			.map(|source| source as &(dyn std::error::Error + 'static))
	}
}

/// Formats an error together with every error in its `source()` chain.
pub fn format_error_chain(err: &dyn std::error::Error) -> String {
	let mut result = err.to_string();
	let mut source = err.source();

	while let Some(err) = source {
		result.push_str(&format!("\n  Caused by: {}", err));
		source = err.source();
	}

	result
}
