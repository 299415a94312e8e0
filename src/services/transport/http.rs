//! reqwest-backed transport for the Cloudflare API.
//!
//! Builds one pooled client per transport with authentication headers, a request
//! timeout and a transient-error retry middleware, then exchanges JSON bodies with
//! paths below the configured base URL.

use async_trait::async_trait;
use reqwest::{
	header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION},
	Client, Method,
};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::{
	models::{ClientConfig, ConfigLoader, Credentials, SecretString, SecretValue},
	services::transport::{
		HttpTransport, RequestMethod, TransportError, TransportRequest, TransportResponse,
	},
};

const X_AUTH_EMAIL: &str = "x-auth-email";
const X_AUTH_KEY: &str = "x-auth-key";

/// HTTP transport bound to a base URL and a set of credentials
#[derive(Clone)]
pub struct ReqwestTransport {
	/// API root without a trailing slash
	base_url: String,
	/// HTTP client with retry middleware
	client: ClientWithMiddleware,
}

impl ReqwestTransport {
	/// Creates a new transport from a client configuration
	///
	/// Credentials are resolved once, here, and kept only inside the client's
	/// default headers (marked sensitive).
	///
	/// # Arguments
	/// * `config` - Base URL, credentials, timeout and retry settings
	///
	/// # Returns
	/// * `Result<Self, TransportError>` - Transport or configuration error
	pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
		config.validate().map_err(|e| {
			TransportError::config_error_with_source("Invalid client configuration", *e, None)
		})?;

		let client = Client::builder()
			.default_headers(auth_headers(&config.credentials)?)
			.timeout(config.timeout())
			.build()
			.map_err(|e| {
				TransportError::config_error_with_source("Failed to build HTTP client", e, None)
			})?;

		let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
		let client = ClientBuilder::new(client)
			.with(RetryTransientMiddleware::new_with_policy(retry_policy))
			.build();

		Ok(Self {
			base_url: config.base_url.trim_end_matches('/').to_string(),
			client,
		})
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn url_for(&self, path: &str) -> String {
		if path.starts_with('/') {
			format!("{}{}", self.base_url, path)
		} else {
			format!("{}/{}", self.base_url, path)
		}
	}
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
	async fn request(
		&self,
		request: TransportRequest,
	) -> Result<TransportResponse, TransportError> {
		let url = self.url_for(&request.path);
		let method = match request.method {
			RequestMethod::Get => Method::GET,
			RequestMethod::Patch => Method::PATCH,
		};

		debug!(method = %request.method, url = %url, "sending request");

		let mut builder = self
			.client
			.request(method, url.as_str())
			.header(ACCEPT, "application/json");
		if let Some(data) = &request.data {
			builder = builder.json(data);
		}

		let response = builder.send().await.map_err(|e| {
			TransportError::connection_error_with_source(
				format!("Failed to send {} request to {}", request.method, url),
				e,
			)
		})?;

		let status = response.status();
		let body = response.bytes().await.map_err(|e| {
			TransportError::connection_error_with_source("Failed to read response body", e)
		})?;
		let data = if body.is_empty() {
			None
		} else {
			serde_json::from_slice::<Value>(&body).ok()
		};

		debug!(status = status.as_u16(), has_body = data.is_some(), "received response");

		if !status.is_success() {
			warn!(status = status.as_u16(), url = %url, "request returned error status");
			return Err(TransportError::response_error(
				status.as_u16(),
				data,
				format!("Request returned error status: {}", status),
			));
		}

		match data {
			Some(data) => Ok(TransportResponse {
				status: status.as_u16(),
				data,
			}),
			None => Err(TransportError::response_error(
				status.as_u16(),
				None,
				"Response body is not valid JSON",
			)),
		}
	}
}

/// Builds the authentication headers for the given credentials
fn auth_headers(credentials: &Credentials) -> Result<HeaderMap, TransportError> {
	let mut headers = HeaderMap::new();

	match credentials {
		Credentials::ApiToken { token } => {
			let token = resolve_secret(token)?;
			let bearer = SecretString::new(format!("Bearer {}", token.as_str()));
			headers.insert(
				AUTHORIZATION,
				header_value("authorization", bearer.as_str(), true)?,
			);
		}
		Credentials::ApiKey { email, key } => {
			let key = resolve_secret(key)?;
			headers.insert(
				HeaderName::from_static(X_AUTH_EMAIL),
				header_value(X_AUTH_EMAIL, email.trim(), false)?,
			);
			headers.insert(
				HeaderName::from_static(X_AUTH_KEY),
				header_value(X_AUTH_KEY, key.as_str(), true)?,
			);
		}
	}

	Ok(headers)
}

fn resolve_secret(secret: &SecretValue) -> Result<SecretString, TransportError> {
	secret.resolve().map_err(|e| {
		TransportError::config_error_with_source("Failed to resolve credentials", *e, None)
	})
}

fn header_value(
	name: &str,
	value: &str,
	sensitive: bool,
) -> Result<HeaderValue, TransportError> {
	let mut header = HeaderValue::from_str(value).map_err(|e| {
		TransportError::config_error_with_source(
			"Invalid header value",
			e,
			Some(HashMap::from([("header".to_string(), name.to_string())])),
		)
	})?;
	header.set_sensitive(sensitive);
	Ok(header)
}
