//! Security models
//!
//! This module contains the credential models for the crate.
//!
//! - `error`: Error types for credential resolution
//! - `secret`: Secret management and zeroization

mod error;
mod secret;

pub use error::SecurityError;
pub use secret::{SecretString, SecretValue};
