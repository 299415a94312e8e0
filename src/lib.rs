//! Client adapter for the Cloudflare zone security level setting.
//!
//! The crate reads and writes the `security_level` setting of a zone:
//!
//! - [`services::security::SecuritySettingService`] issues the requests and wraps every
//!   outcome in a [`models::ApiResponse`] envelope
//! - [`utils::to_camel_case`] and [`utils::to_hungarian_case`] translate keys between the
//!   API's underscore-delimited convention and the camelCase convention used here
//! - [`services::transport::HttpTransport`] abstracts the HTTP client, with
//!   [`services::transport::ReqwestTransport`] as the default implementation
//!
//! # Example
//!
//! ```no_run
//! use cloudflare_security::{
//!     models::{ApiResponse, ClientConfig, SecurityLevel},
//!     services::security::SecuritySettingService,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let service = SecuritySettingService::from_config(&config)?;
//!
//! match service.update_security_level("023e105f4ecef8ad9ca31a8372d0c353", SecurityLevel::High).await {
//!     ApiResponse::Success(success) => println!("now {}", success.result.value.display_label()),
//!     ApiResponse::Failure(failure) => eprintln!("rejected: {:?}", failure.errors),
//!     ApiResponse::Fault(fault) => eprintln!("unreachable: {}", fault.message),
//! }
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod services;
pub mod utils;

pub use models::{ApiResponse, ClientConfig, CloudflareSecurityInfo, SecurityLevel};
pub use services::security::SecuritySettingService;
