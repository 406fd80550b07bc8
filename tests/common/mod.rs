//! Helpers shared by the integration test binaries.

#![allow(dead_code)]

// self
use sethealth::{
	auth::Credentials,
	client::ReqwestTokenClient,
	config::{ClientConfig, ClientConfigBuilder},
	http::ReqwestHttpClient,
};

/// Key used by test clients.
pub const TEST_KEY: &str = "test-key";
/// Secret used by test clients.
pub const TEST_SECRET: &str = "test-secret";

/// Builds the default reqwest transport used against plain-HTTP mock servers.
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	ReqwestHttpClient::new().expect("Failed to build Reqwest client for tests.")
}

/// Config builder pointed at a mock server's base URL, with plain HTTP allowed.
pub fn test_config_builder(base_url: &str) -> ClientConfigBuilder {
	ClientConfig::builder().base_url(base_url).allow_insecure_http(true)
}

/// Constructs a reqwest-backed client for `base_url` using [`TEST_KEY`] / [`TEST_SECRET`].
pub fn build_reqwest_test_client(base_url: &str) -> ReqwestTokenClient {
	let config =
		test_config_builder(base_url).build().expect("Failed to build test client config.");

	build_reqwest_test_client_with(config)
}

/// Constructs a reqwest-backed client with an explicit config.
pub fn build_reqwest_test_client_with(config: ClientConfig) -> ReqwestTokenClient {
	let credentials =
		Credentials::new(TEST_KEY, TEST_SECRET).expect("Failed to build test credentials.");

	ReqwestTokenClient::with_http_client(credentials, config, test_reqwest_http_client())
}
