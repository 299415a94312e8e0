#![no_main]

use cloudflare_security::utils::{camel_key, hungarian_key};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|key: &str| {
	let camel = camel_key(key);
	assert_eq!(camel_key(&camel), camel);

	let wire = hungarian_key(key);
	assert_eq!(hungarian_key(&wire), wire);
	assert!(!wire.chars().any(|c| c.is_ascii_uppercase()));
});
