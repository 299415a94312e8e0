use cloudflare_security::models::SecurityLevel;
use proptest::prelude::*;
use serde_json::{Map, Value};

const MAX_COLLECTION_SIZE: usize = 5;

/// camelCase key: lowercase first letter, then ASCII alphanumerics
pub fn camel_key_strategy() -> impl Strategy<Value = String> + Clone {
	"[a-z][a-zA-Z0-9]{0,12}".prop_map(|s| s.to_string())
}

/// underscore-delimited key whose segments start with a lowercase letter
pub fn wire_key_strategy() -> impl Strategy<Value = String> + Clone {
	prop::collection::vec("[a-z][a-z0-9]{0,6}", 1..4).prop_map(|segments| segments.join("_"))
}

pub fn scalar_strategy() -> impl Strategy<Value = Value> {
	prop_oneof![
		Just(Value::Null),
		any::<bool>().prop_map(Value::Bool),
		any::<i64>().prop_map(Value::from),
		"[a-zA-Z0-9_ ]{0,16}".prop_map(Value::String),
	]
}

/// JSON tree whose object keys are drawn from `keys`
pub fn json_tree_strategy<S>(keys: S) -> impl Strategy<Value = Value>
where
	S: Strategy<Value = String> + Clone + 'static,
{
	scalar_strategy().prop_recursive(4, 32, MAX_COLLECTION_SIZE as u32, move |inner| {
		prop_oneof![
			prop::collection::vec(inner.clone(), 0..MAX_COLLECTION_SIZE).prop_map(Value::Array),
			prop::collection::btree_map(keys.clone(), inner, 0..MAX_COLLECTION_SIZE)
				.prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
		]
	})
}

pub fn security_level_strategy() -> impl Strategy<Value = SecurityLevel> {
	prop::sample::select(SecurityLevel::ALL.to_vec())
}
