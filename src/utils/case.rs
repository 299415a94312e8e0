//! Key-case conversion between the wire and application naming conventions.
//!
//! The Cloudflare API speaks underscore-delimited keys (`modified_on`), while the
//! rest of the crate works with camelCase keys (`modifiedOn`). The functions here
//! rewrite object keys of a [`serde_json::Value`] tree recursively, descending into
//! nested objects and arrays. Values are never touched, so a string such as
//! `"under_attack"` survives both directions unchanged.

use serde_json::{Map, Value};

/// Rewrites every object key in `input` from `word_word` to `wordWord`.
///
/// Leading and trailing underscores are kept as they are. Scalars are returned
/// unchanged, and already camelCased keys pass through untouched.
///
/// When two keys of one object convert to the same name (`aB` and `a_b`), only
/// one entry is kept: the one whose original key sorts last.
///
/// # Examples
/// ```
/// use cloudflare_security::utils::to_camel_case;
/// use serde_json::json;
///
/// let converted = to_camel_case(&json!({ "security_level": { "value": "low" } }));
/// assert_eq!(converted, json!({ "securityLevel": { "value": "low" } }));
/// ```
pub fn to_camel_case(input: &Value) -> Value {
	rename_keys(input, &camel_key)
}

/// Rewrites every object key in `input` from `wordWord` to `word_word`.
///
/// Colliding keys are resolved as in [`to_camel_case`]: the entry whose original
/// key sorts last wins.
///
/// # Examples
/// ```
/// use cloudflare_security::utils::to_hungarian_case;
/// use serde_json::json;
///
/// let converted = to_hungarian_case(&json!({ "modifiedOn": null, "value": "high" }));
/// assert_eq!(converted, json!({ "modified_on": null, "value": "high" }));
/// ```
pub fn to_hungarian_case(input: &Value) -> Value {
	rename_keys(input, &hungarian_key)
}

/// Converts a single underscore-delimited key to camelCase.
pub fn camel_key(key: &str) -> String {
	let body = key.trim_matches('_');
	if body.is_empty() {
		return key.to_string();
	}

	// '_' is a single byte, so these offsets are char boundaries.
	let prefix_len = key.len() - key.trim_start_matches('_').len();
	let suffix_len = key.len() - key.trim_end_matches('_').len();

	let mut converted = String::with_capacity(key.len());
	converted.push_str(&key[..prefix_len]);

	let mut upper_next = false;
	for ch in body.chars() {
		if ch == '_' {
			upper_next = true;
			continue;
		}
		if upper_next {
			converted.extend(ch.to_uppercase());
			upper_next = false;
		} else {
			converted.push(ch);
		}
	}

	converted.push_str(&key[key.len() - suffix_len..]);
	converted
}

/// Converts a single camelCase key to the underscore-delimited convention.
pub fn hungarian_key(key: &str) -> String {
	let mut converted = String::with_capacity(key.len() + 4);

	for (idx, ch) in key.chars().enumerate() {
		if ch.is_ascii_uppercase() {
			if idx > 0 && !converted.ends_with('_') {
				converted.push('_');
			}
			converted.push(ch.to_ascii_lowercase());
		} else {
			converted.push(ch);
		}
	}

	converted
}

// Entries are visited in key order, so a later key overwrites an earlier one
// that renames to the same name.
fn rename_keys(input: &Value, rename: &dyn Fn(&str) -> String) -> Value {
	match input {
		Value::Object(map) => {
			let renamed: Map<String, Value> = map
				.iter()
				.map(|(key, value)| (rename(key), rename_keys(value, rename)))
				.collect();
			Value::Object(renamed)
		}
		Value::Array(items) => {
			Value::Array(items.iter().map(|item| rename_keys(item, rename)).collect())
		}
		scalar => scalar.clone(),
	}
}
