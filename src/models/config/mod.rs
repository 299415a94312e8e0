//! Configuration loading and validation.
//!
//! - `client_config`: Transport configuration (base URL, credentials, timeouts)
//! - `error`: Error types for configuration operations

mod client_config;
mod error;

use std::path::Path;

pub use client_config::*;
pub use error::ConfigError;

/// Common interface for loading and validating configuration files
pub trait ConfigLoader: Sized {
	/// Load a configuration from a specific file
	fn load_from_path(path: &Path) -> Result<Self, Box<ConfigError>>;

	/// Validate the configuration
	fn validate(&self) -> Result<(), Box<ConfigError>>;
}
