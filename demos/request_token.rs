//! Demonstrates requesting a Sethealth token with explicit options against a local mock of the
//! token endpoint.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use sethealth::{
	auth::Credentials,
	client::TokenClient,
	config::ClientConfig,
	http::ReqwestHttpClient,
	request::TokenRequestOptions,
	time::Duration,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token").json_body(json!({
				"id": "demo-key",
				"secret": "demo-secret",
				"user-id": "patient-7",
				"expires-in": 600_000_000_000_i64,
				"test-mode": true,
			}));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"token\":\"demo-short-lived-token\"}");
		})
		.await;
	let config = ClientConfig::builder()
		.base_url(server.base_url())
		.allow_insecure_http(true)
		.timeout(Duration::seconds(5))
		.build()?;
	let client = <TokenClient<ReqwestHttpClient>>::with_http_client(
		Credentials::new("demo-key", "demo-secret")?,
		config,
		Arc::new(ReqwestHttpClient::new()?),
	);
	let options = TokenRequestOptions::default()
		.with_user_id("patient-7")
		.with_expires_in(Duration::minutes(10))
		.with_test_mode(true);
	let response = client.request_token_with(&options).await?;

	println!("Short-lived token: {}.", response.expose());

	token_mock.assert_async().await;

	Ok(())
}
