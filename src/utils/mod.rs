//! Utility modules for common functionality.
//!
//! - case: Key-case conversion between wire and application conventions
//! - error: Context-rich error type shared by the domain error enums
//! - logging: Tracing subscriber setup for consumers of the crate

mod case;
mod error;
pub mod logging;

pub use case::*;
pub use error::*;
