//! Zone security level setting.
//!
//! Defines the closed set of security levels Cloudflare accepts, their display
//! labels, and the setting object returned by the settings endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Security level applied to a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityLevel {
	EssentiallyOff,
	Low,
	Medium,
	High,
	UnderAttack,
}

/// Human readable label for every security level, in [`SecurityLevel::ALL`] order
pub const SECURITY_LEVEL_DISPLAY: &[(SecurityLevel, &str)] = &[
	(SecurityLevel::EssentiallyOff, "基本关闭"),
	(SecurityLevel::Low, "低"),
	(SecurityLevel::Medium, "中"),
	(SecurityLevel::High, "高"),
	(SecurityLevel::UnderAttack, "Under Attack模式"),
];

impl SecurityLevel {
	/// All levels, from least to most strict
	pub const ALL: [SecurityLevel; 5] = [
		SecurityLevel::EssentiallyOff,
		SecurityLevel::Low,
		SecurityLevel::Medium,
		SecurityLevel::High,
		SecurityLevel::UnderAttack,
	];

	/// Wire tag of the level
	pub fn as_str(&self) -> &'static str {
		match self {
			SecurityLevel::EssentiallyOff => "essentially_off",
			SecurityLevel::Low => "low",
			SecurityLevel::Medium => "medium",
			SecurityLevel::High => "high",
			SecurityLevel::UnderAttack => "under_attack",
		}
	}

	/// Presentation label from [`SECURITY_LEVEL_DISPLAY`]
	pub fn display_label(&self) -> &'static str {
		SECURITY_LEVEL_DISPLAY
			.iter()
			.find(|(level, _)| level == self)
			.map(|(_, label)| *label)
			.unwrap_or_else(|| self.as_str())
	}
}

impl fmt::Display for SecurityLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returned when a string is not one of the five security level tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSecurityLevel(pub String);

impl fmt::Display for InvalidSecurityLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Invalid security level: {}", self.0)
	}
}

impl std::error::Error for InvalidSecurityLevel {}

impl FromStr for SecurityLevel {
	type Err = InvalidSecurityLevel;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		SecurityLevel::ALL
			.into_iter()
			.find(|level| level.as_str() == s)
			.ok_or_else(|| InvalidSecurityLevel(s.to_string()))
	}
}

/// Security level setting of a zone, with keys in the application convention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudflareSecurityInfo {
	/// Current security level
	pub value: SecurityLevel,
	/// Setting identifier, always `security_level` when present
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Whether the zone plan allows changing the setting
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub editable: Option<bool>,
	/// Last time the setting was changed
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub modified_on: Option<DateTime<Utc>>,
}

impl CloudflareSecurityInfo {
	pub fn new(value: SecurityLevel) -> Self {
		Self {
			value,
			id: None,
			editable: None,
			modified_on: None,
		}
	}
}
