//! Secret handling for API credentials.
//!
//! API tokens and global API keys are held in [`SecretString`], which zeroizes its
//! memory on drop and never prints its contents. A [`SecretValue`] names where the
//! secret comes from (inline in the configuration or an environment variable) and
//! resolves it on demand.

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, env, fmt};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::models::security::error::SecurityError;

/// A type that represents a secret value that can be sourced from different places
/// and ensures proper zeroization of sensitive data.
#[derive(Clone, Serialize, Deserialize, ZeroizeOnDrop)]
#[serde(tag = "type", content = "value")]
pub enum SecretValue {
	/// A plain text secret value
	Plain(SecretString),
	/// A secret stored in an environment variable
	Environment(String),
}

impl PartialEq for SecretValue {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Plain(l0), Self::Plain(r0)) => l0.as_str() == r0.as_str(),
			(Self::Environment(l0), Self::Environment(r0)) => l0 == r0,
			_ => false,
		}
	}
}

/// A string type that automatically zeroizes its contents when dropped.
///
/// `Debug` output is redacted so that secrets cannot leak through logs or
/// error messages.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl PartialEq for SecretString {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl SecretValue {
	/// Resolves the secret value based on its type.
	///
	/// # Errors
	///
	/// Returns a `SecurityError` if the environment variable is not set or the
	/// resolved secret is empty.
	pub fn resolve(&self) -> Result<SecretString, Box<SecurityError>> {
		let secret = match self {
			SecretValue::Plain(secret) => secret.clone(),
			SecretValue::Environment(env_var) => {
				env::var(env_var).map(SecretString::new).map_err(|e| {
					Box::new(SecurityError::resolve_error_with_source(
						format!("Failed to get environment variable {}", env_var),
						e,
						None,
					))
				})?
			}
		};

		if secret.as_str().trim().is_empty() {
			return Err(Box::new(SecurityError::validation_error(
				"Resolved secret is empty",
				Some(HashMap::from([("source".to_string(), self.source_name())])),
			)));
		}

		Ok(secret)
	}

	/// Checks if the secret value is empty
	pub fn is_empty(&self) -> bool {
		match self {
			SecretValue::Plain(secret) => secret.as_str().trim().is_empty(),
			SecretValue::Environment(env_var) => env_var.trim().is_empty(),
		}
	}

	/// Description of the source that is safe to log
	fn source_name(&self) -> String {
		match self {
			SecretValue::Plain(_) => "plain".to_string(),
			SecretValue::Environment(env_var) => format!("environment:{}", env_var),
		}
	}
}

impl Zeroize for SecretValue {
	fn zeroize(&mut self) {
		match self {
			SecretValue::Plain(secret) => secret.zeroize(),
			SecretValue::Environment(env_var) => env_var.zeroize(),
		}
	}
}

impl SecretString {
	/// Creates a new `SecretString` with the given value.
	pub fn new(value: String) -> Self {
		Self(value)
	}

	/// Gets a reference to the underlying string.
	///
	/// # Security Note
	///
	/// Be careful with this method as it exposes the secret value.
	/// The reference should be used immediately and not stored.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self::new(value.to_string())
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("SecretString(<redacted>)")
	}
}

impl fmt::Debug for SecretValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SecretValue::Plain(secret) => f.debug_tuple("Plain").field(secret).finish(),
			SecretValue::Environment(env_var) => {
				f.debug_tuple("Environment").field(env_var).finish()
			}
		}
	}
}
