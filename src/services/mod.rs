//! Core services.
//!
//! - `security`: Adapter for the zone security level setting
//! - `transport`: HTTP transport abstraction and its reqwest implementation

pub mod security;
pub mod transport;
