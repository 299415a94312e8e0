//! API client configuration loading and validation.
//!
//! This module implements the ConfigLoader trait for [`ClientConfig`], allowing the
//! client to be configured from a JSON file or from environment variables.

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path, time::Duration};

use crate::models::{config::error::ConfigError, ConfigLoader, SecretValue};

/// Cloudflare API v4 root
pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Client-level request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "CLOUDFLARE_API_BASE_URL";
pub const ENV_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";
pub const ENV_API_EMAIL: &str = "CLOUDFLARE_API_EMAIL";
pub const ENV_API_KEY: &str = "CLOUDFLARE_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "CLOUDFLARE_API_TIMEOUT_SECS";
pub const ENV_MAX_RETRIES: &str = "CLOUDFLARE_API_MAX_RETRIES";

/// How requests authenticate against the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Credentials {
	/// Scoped API token, sent as a bearer token
	ApiToken { token: SecretValue },
	/// Global API key, sent with the account email
	ApiKey { email: String, key: SecretValue },
}

/// Configuration of the HTTP transport used by the adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
	/// API root every request path is appended to
	#[serde(default = "default_base_url")]
	pub base_url: String,
	pub credentials: Credentials,
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs: u64,
	/// Retries on transient transport errors, zero disables retrying
	#[serde(default)]
	pub max_retries: u32,
}

fn default_base_url() -> String {
	DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
	DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
	pub fn new(credentials: Credentials) -> Self {
		Self {
			base_url: default_base_url(),
			credentials,
			timeout_secs: DEFAULT_TIMEOUT_SECS,
			max_retries: 0,
		}
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}

	/// Loads the configuration from the process environment.
	///
	/// A `.env` file in the working directory (or its parents) is loaded first
	/// when present. Secrets stay in the environment: the returned credentials
	/// reference the variables instead of copying their values.
	pub fn from_env() -> Result<Self, Box<ConfigError>> {
		let _ = dotenvy::dotenv();
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Builds the configuration from a variable lookup function
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Box<ConfigError>> {
		let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

		let credentials = if present(ENV_API_TOKEN).is_some() {
			Credentials::ApiToken {
				token: SecretValue::Environment(ENV_API_TOKEN.to_string()),
			}
		} else if let (Some(email), Some(_)) = (present(ENV_API_EMAIL), present(ENV_API_KEY)) {
			Credentials::ApiKey {
				email,
				key: SecretValue::Environment(ENV_API_KEY.to_string()),
			}
		} else {
			return Err(Box::new(ConfigError::validation_error(
				format!(
					"No credentials found: set {} or both {} and {}",
					ENV_API_TOKEN, ENV_API_EMAIL, ENV_API_KEY
				),
				None,
			)));
		};

		let mut config = Self::new(credentials);

		if let Some(base_url) = present(ENV_BASE_URL) {
			config.base_url = base_url;
		}
		if let Some(timeout) = present(ENV_TIMEOUT_SECS) {
			config.timeout_secs = parse_number(ENV_TIMEOUT_SECS, &timeout)?;
		}
		if let Some(retries) = present(ENV_MAX_RETRIES) {
			config.max_retries = parse_number(ENV_MAX_RETRIES, &retries)?;
		}

		config.validate()?;
		Ok(config)
	}
}

fn parse_number<N>(name: &str, raw: &str) -> Result<N, Box<ConfigError>>
where
	N: std::str::FromStr,
	N::Err: std::error::Error + Send + Sync + 'static,
{
	raw.trim().parse::<N>().map_err(|e| {
		Box::new(ConfigError::parse_error_with_source(
			format!("Invalid value for {}", name),
			e,
			Some(HashMap::from([("value".to_string(), raw.to_string())])),
		))
	})
}

impl ConfigLoader for ClientConfig {
	/// Load the client configuration from a JSON file
	fn load_from_path(path: &Path) -> Result<Self, Box<ConfigError>> {
		let metadata = || Some(HashMap::from([("path".to_string(), path.display().to_string())]));

		let content = fs::read_to_string(path).map_err(|e| {
			ConfigError::file_error_with_source("Failed to read config file", e, metadata())
		})?;
		let config: ClientConfig = serde_json::from_str(&content).map_err(|e| {
			ConfigError::parse_error_with_source("Failed to parse config file", e, metadata())
		})?;

		// Validate the config after loading
		config.validate()?;

		Ok(config)
	}

	/// Validate the client configuration
	///
	/// Ensures that:
	/// - The base URL parses and uses http or https
	/// - The timeout is not zero
	/// - Credentials are not empty
	fn validate(&self) -> Result<(), Box<ConfigError>> {
		let base_url = url::Url::parse(&self.base_url).map_err(|e| {
			ConfigError::validation_error_with_source(
				"Invalid base URL",
				e,
				Some(HashMap::from([("base_url".to_string(), self.base_url.clone())])),
			)
		})?;

		if !matches!(base_url.scheme(), "http" | "https") {
			return Err(Box::new(ConfigError::validation_error(
				format!("Unsupported base URL scheme: {}", base_url.scheme()),
				None,
			)));
		}

		if self.timeout_secs == 0 {
			return Err(Box::new(ConfigError::validation_error(
				"Timeout must be greater than zero",
				None,
			)));
		}

		match &self.credentials {
			Credentials::ApiToken { token } => {
				if token.is_empty() {
					return Err(Box::new(ConfigError::validation_error(
						"API token cannot be empty",
						None,
					)));
				}
			}
			Credentials::ApiKey { email, key } => {
				let email = email.trim();
				if email.is_empty() || !email.contains('@') {
					return Err(Box::new(ConfigError::validation_error(
						"API key credentials need a valid account email",
						None,
					)));
				}
				if key.is_empty() {
					return Err(Box::new(ConfigError::validation_error(
						"API key cannot be empty",
						None,
					)));
				}
			}
		}

		Ok(())
	}
}
