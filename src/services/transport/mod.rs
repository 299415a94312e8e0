//! HTTP transport abstraction.
//!
//! The security setting adapter talks to the API through [`HttpTransport`], a
//! request function bound to a base endpoint and credentials. [`ReqwestTransport`]
//! is the production implementation; tests substitute their own.

mod error;
mod http;

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

pub use error::TransportError;
pub use http::ReqwestTransport;

/// HTTP methods used against the settings endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
	Get,
	Patch,
}

impl RequestMethod {
	pub fn as_str(&self) -> &'static str {
		match self {
			RequestMethod::Get => "GET",
			RequestMethod::Patch => "PATCH",
		}
	}
}

impl fmt::Display for RequestMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Request relative to the transport's base URL
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
	/// Path below the base URL, starting with `/`
	pub path: String,
	pub method: RequestMethod,
	/// JSON body, already in the wire key convention
	pub data: Option<Value>,
}

impl TransportRequest {
	pub fn get(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			method: RequestMethod::Get,
			data: None,
		}
	}

	pub fn patch(path: impl Into<String>, data: Value) -> Self {
		Self {
			path: path.into(),
			method: RequestMethod::Patch,
			data: Some(data),
		}
	}
}

/// Successful reply with its JSON body, keys still in the wire convention
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
	pub status: u16,
	pub data: Value,
}

/// Request-capable client bound to a base endpoint and credentials
#[async_trait]
pub trait HttpTransport: Send + Sync {
	/// Sends one request and waits for the reply.
	///
	/// Non-success statuses are reported as [`TransportError::ResponseError`]
	/// with the parsed body attached when there is one.
	async fn request(&self, request: TransportRequest)
		-> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
	async fn request(
		&self,
		request: TransportRequest,
	) -> Result<TransportResponse, TransportError> {
		(**self).request(request).await
	}
}
