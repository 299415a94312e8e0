//! Security setting services.
//!
//! - `service`: Read and update the zone security level

mod service;

pub use service::{security_level_path, SecuritySettingService, SECURITY_LEVEL_SETTING};
