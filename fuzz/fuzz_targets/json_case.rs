#![no_main]

use cloudflare_security::{
	models::{ApiResponse, CloudflareSecurityInfo},
	utils::{to_camel_case, to_hungarian_case},
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let Ok(body) = serde_json::from_slice::<serde_json::Value>(data) else {
		return;
	};

	let camel = to_camel_case(&body);
	let _ = to_hungarian_case(&camel);

	// Any payload must decode into one of the response variants without panicking.
	let _ = ApiResponse::<CloudflareSecurityInfo>::from_body(Some(200), camel);
});
