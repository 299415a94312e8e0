//! Transport error types and handling.
//!
//! Distinguishes replies the remote service produced (and which may carry a
//! structured body) from failures where no reply was received at all.

use serde_json::Value;
use std::collections::HashMap;

use crate::utils::ErrorContext;

/// Represents possible errors while exchanging a request with the API
#[derive(Debug)]
pub enum TransportError {
	/// The service replied with a non-success status
	ResponseError {
		status: u16,
		/// JSON body of the reply, when it had one
		data: Option<Value>,
		context: ErrorContext,
	},
	/// No reply was received (DNS, connect, TLS, timeout, ...)
	ConnectionError(ErrorContext),
	/// The request could not be built (bad URL, bad header value, ...)
	ConfigError(ErrorContext),
}

impl TransportError {
	const TARGET: &str = "transport";

	/// Creates a new response error carrying the reply status and body
	pub fn response_error(status: u16, data: Option<Value>, msg: impl Into<String>) -> Self {
		let metadata = HashMap::from([("status".to_string(), status.to_string())]);
		Self::ResponseError {
			status,
			data,
			context: ErrorContext::new("Response Error", msg, Some(metadata))
				.with_target(Self::TARGET),
		}
	}

	/// Creates a new connection error
	pub fn connection_error(msg: impl Into<String>) -> Self {
		Self::ConnectionError(
			ErrorContext::new("Connection Error", msg, None).with_target(Self::TARGET),
		)
	}

	/// Creates a new connection error with source
	pub fn connection_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
	) -> Self {
		Self::ConnectionError(
			ErrorContext::new("Connection Error", msg, None)
				.with_source(source)
				.with_target(Self::TARGET),
		)
	}

	/// Creates a new configuration error with source
	pub fn config_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ConfigError(
			ErrorContext::new("Config Error", msg, metadata)
				.with_source(source)
				.with_target(Self::TARGET),
		)
	}

	/// HTTP status of the reply, if one was received
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::ResponseError { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Structured body of the reply, if one was received and parsed
	pub fn response_data(&self) -> Option<&Value> {
		match self {
			Self::ResponseError { data, .. } => data.as_ref(),
			_ => None,
		}
	}

	fn context(&self) -> &ErrorContext {
		match self {
			Self::ResponseError { context, .. } => context,
			Self::ConnectionError(ctx) => ctx,
			Self::ConfigError(ctx) => ctx,
		}
	}
}

impl std::error::Error for TransportError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		std::error::Error::source(self.context())
	}
}

impl std::fmt::Display for TransportError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.context().fmt(f)
	}
}
