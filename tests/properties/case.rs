use cloudflare_security::utils::{camel_key, hungarian_key, to_camel_case, to_hungarian_case};
use proptest::{prelude::*, test_runner::Config};
use serde_json::Value;

use super::strategies::{camel_key_strategy, json_tree_strategy, wire_key_strategy};

fn scalar_leaves(value: &Value) -> Vec<String> {
	let mut leaves = Vec::new();
	collect_leaves(value, &mut leaves);
	leaves.sort();
	leaves
}

fn collect_leaves(value: &Value, leaves: &mut Vec<String>) {
	match value {
		Value::Object(map) => map.values().for_each(|v| collect_leaves(v, leaves)),
		Value::Array(items) => items.iter().for_each(|v| collect_leaves(v, leaves)),
		scalar => leaves.push(scalar.to_string()),
	}
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_application_keys_round_trip(tree in json_tree_strategy(camel_key_strategy())) {
		prop_assert_eq!(to_camel_case(&to_hungarian_case(&tree)), tree);
	}

	#[test]
	fn test_wire_keys_round_trip(tree in json_tree_strategy(wire_key_strategy())) {
		prop_assert_eq!(to_hungarian_case(&to_camel_case(&tree)), tree);
	}

	#[test]
	fn test_conversion_is_idempotent(tree in json_tree_strategy("[a-zA-Z0-9_]{0,10}".prop_map(|s| s.to_string()))) {
		let camel = to_camel_case(&tree);
		prop_assert_eq!(to_camel_case(&camel), camel);

		let wire = to_hungarian_case(&tree);
		prop_assert_eq!(to_hungarian_case(&wire), wire);
	}

	#[test]
	fn test_conversion_never_touches_values(tree in json_tree_strategy(wire_key_strategy())) {
		let leaves = scalar_leaves(&tree);
		prop_assert_eq!(scalar_leaves(&to_camel_case(&tree)), leaves.clone());
		prop_assert_eq!(scalar_leaves(&to_hungarian_case(&tree)), leaves);
	}

	#[test]
	fn test_camel_keys_have_no_interior_underscores(key in "[a-z_]{0,16}") {
		let converted = camel_key(&key);
		prop_assert!(!converted.trim_matches('_').contains('_'));
	}

	#[test]
	fn test_hungarian_keys_have_no_ascii_capitals(key in "[a-zA-Z0-9_]{0,16}") {
		let converted = hungarian_key(&key);
		prop_assert!(!converted.chars().any(|c| c.is_ascii_uppercase()));
	}

	#[test]
	fn test_single_word_keys_are_invariant(key in "[a-z][a-z0-9]{0,12}") {
		prop_assert_eq!(camel_key(&key), key.clone());
		prop_assert_eq!(hungarian_key(&key), key);
	}
}
