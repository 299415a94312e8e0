//! Uniform response envelope for API operations.
//!
//! Every adapter operation resolves to an [`ApiResponse`], whether the remote
//! service accepted the call, rejected it with a structured body, or could not be
//! reached at all. Callers match on the variant instead of handling errors on a
//! separate channel.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Error or informational message attached to a Cloudflare response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
	/// Numeric error code, when the service provides one
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub code: Option<i64>,
	/// Human readable message
	#[serde(default)]
	pub message: String,
}

/// Accepted call with its decoded payload
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSuccess<T> {
	pub result: T,
	pub messages: Vec<ApiMessage>,
}

/// Call rejected by the remote service with a structured body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
	/// HTTP status of the rejection, if known
	pub status: Option<u16>,
	/// Errors listed in the body
	pub errors: Vec<ApiMessage>,
	/// Whole error body in the application key convention
	pub body: Value,
}

/// Why no structured answer is available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
	/// The request never produced a readable reply
	Transport,
	/// A reply arrived but could not be decoded
	MalformedBody,
}

/// Call that produced no structured answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFault {
	pub kind: FaultKind,
	pub message: String,
}

/// Response envelope wrapping the outcome of an API call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
	Success(ApiSuccess<T>),
	Failure(ApiFailure),
	Fault(ApiFault),
}

/// Non-success outcome, for callers that prefer `Result` and `?`
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
	Failure(ApiFailure),
	Fault(ApiFault),
}

impl<T: DeserializeOwned> ApiResponse<T> {
	/// Builds the envelope from a successful reply body already converted to
	/// the application key convention.
	///
	/// Cloudflare wraps payloads as `{ success, errors, messages, result }`. When the
	/// body has that shape the payload is read from `result` and `success: false`
	/// becomes a [`ApiResponse::Failure`]. Any other body is decoded as the payload
	/// itself.
	pub fn from_body(status: Option<u16>, body: Value) -> Self {
		if !is_envelope(&body) {
			return match serde_json::from_value::<T>(body) {
				Ok(result) => ApiResponse::Success(ApiSuccess {
					result,
					messages: Vec::new(),
				}),
				Err(e) => ApiResponse::malformed(e),
			};
		}

		if body.get("success").and_then(Value::as_bool) == Some(false) {
			return ApiResponse::rejected(status, body);
		}

		let messages = parse_messages(&body, "messages");
		let result = body.get("result").cloned().unwrap_or(Value::Null);
		match serde_json::from_value::<T>(result) {
			Ok(result) => ApiResponse::Success(ApiSuccess { result, messages }),
			Err(e) => ApiResponse::malformed(e),
		}
	}
}

impl<T> ApiResponse<T> {
	/// Builds a failure from an error body already converted to the application
	/// key convention.
	pub fn rejected(status: Option<u16>, body: Value) -> Self {
		ApiResponse::Failure(ApiFailure {
			status,
			errors: parse_messages(&body, "errors"),
			body,
		})
	}

	/// Builds a fault for a call that produced no structured answer.
	pub fn fault(kind: FaultKind, message: impl Into<String>) -> Self {
		ApiResponse::Fault(ApiFault {
			kind,
			message: message.into(),
		})
	}

	fn malformed(error: serde_json::Error) -> Self {
		ApiResponse::fault(
			FaultKind::MalformedBody,
			format!("Failed to decode response payload: {}", error),
		)
	}

	pub fn is_success(&self) -> bool {
		matches!(self, ApiResponse::Success(_))
	}

	/// Decoded payload, if the call succeeded
	pub fn result(&self) -> Option<&T> {
		match self {
			ApiResponse::Success(success) => Some(&success.result),
			_ => None,
		}
	}

	/// Errors reported by the remote service. Empty unless the call was rejected.
	pub fn errors(&self) -> &[ApiMessage] {
		match self {
			ApiResponse::Failure(failure) => &failure.errors,
			_ => &[],
		}
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
		match self {
			ApiResponse::Success(ApiSuccess { result, messages }) => {
				ApiResponse::Success(ApiSuccess {
					result: f(result),
					messages,
				})
			}
			ApiResponse::Failure(failure) => ApiResponse::Failure(failure),
			ApiResponse::Fault(fault) => ApiResponse::Fault(fault),
		}
	}

	pub fn into_result(self) -> Result<T, ApiError> {
		match self {
			ApiResponse::Success(success) => Ok(success.result),
			ApiResponse::Failure(failure) => Err(ApiError::Failure(failure)),
			ApiResponse::Fault(fault) => Err(ApiError::Fault(fault)),
		}
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ApiError::Failure(failure) => {
				let messages: Vec<String> = failure
					.errors
					.iter()
					.map(|error| match error.code {
						Some(code) => format!("{}: {}", code, error.message),
						None => error.message.clone(),
					})
					.collect();
				match failure.status {
					Some(status) => write!(f, "Request rejected with status {}", status)?,
					None => write!(f, "Request rejected")?,
				}
				if !messages.is_empty() {
					write!(f, " ({})", messages.join("; "))?;
				}
				Ok(())
			}
			ApiError::Fault(fault) => write!(f, "{}", fault.message),
		}
	}
}

impl std::error::Error for ApiError {}

fn is_envelope(body: &Value) -> bool {
	body.as_object()
		.map(|map| map.contains_key("success") && map.contains_key("result"))
		.unwrap_or(false)
}

fn parse_messages(body: &Value, key: &str) -> Vec<ApiMessage> {
	let Some(items) = body.get(key).and_then(Value::as_array) else {
		return Vec::new();
	};

	items
		.iter()
		.map(|item| match item {
			Value::String(message) => ApiMessage {
				code: None,
				message: message.clone(),
			},
			other => serde_json::from_value(other.clone()).unwrap_or_else(|_| ApiMessage {
				code: None,
				message: other.to_string(),
			}),
		})
		.collect()
}
