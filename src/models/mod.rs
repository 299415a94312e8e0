//! Domain models and data structures.
//!
//! - `config`: Client configuration and its loader
//! - `response`: Uniform response envelope returned by API operations
//! - `security`: Credential secrets
//! - `settings`: Zone security level setting

mod config;
mod response;
mod security;
mod settings;

pub use config::{
	ClientConfig, ConfigError, ConfigLoader, Credentials, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
	ENV_API_EMAIL, ENV_API_KEY, ENV_API_TOKEN, ENV_BASE_URL, ENV_MAX_RETRIES, ENV_TIMEOUT_SECS,
};
pub use response::{
	ApiError, ApiFailure, ApiFault, ApiMessage, ApiResponse, ApiSuccess, FaultKind,
};
pub use security::{SecretString, SecretValue, SecurityError};
pub use settings::{
	CloudflareSecurityInfo, InvalidSecurityLevel, SecurityLevel, SECURITY_LEVEL_DISPLAY,
};
