//! Integration tests for the security level adapter.
//!
//! Contains tests for the adapter against a mocked transport, the reqwest
//! transport against a local HTTP server, and end-to-end configuration loading.

mod integration {
	mod config;
	mod mocks;
	mod security;
	mod transport;
}
