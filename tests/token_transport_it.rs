// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	sync::Arc,
};
// crates.io
use parking_lot::Mutex;
use serde_json::{Value, json};
// self
use sethealth::{
	auth::Credentials,
	client::TokenClient,
	config::ClientConfig,
	error::{AuthError, Error},
	http::{TokenTransport, TransportFuture, TransportRequest, TransportResponse},
	request::TokenRequestOptions,
	time::Duration,
};

#[derive(Debug)]
enum FakeTransportError {
	Refused,
}
impl Display for FakeTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Refused => write!(f, "Connection refused."),
		}
	}
}
impl StdError for FakeTransportError {}

#[derive(Default)]
struct RecordingTransport {
	reply: Option<(u16, &'static str)>,
	requests: Mutex<Vec<TransportRequest>>,
}
impl RecordingTransport {
	fn replying(status: u16, body: &'static str) -> Self {
		Self { reply: Some((status, body)), requests: Mutex::default() }
	}

	fn refusing() -> Self {
		Self::default()
	}

	fn recorded(&self) -> Vec<TransportRequest> {
		self.requests.lock().clone()
	}
}
impl TokenTransport for RecordingTransport {
	type TransportError = FakeTransportError;

	fn post_json(
		&self,
		request: TransportRequest,
	) -> TransportFuture<'_, Result<TransportResponse, Self::TransportError>> {
		self.requests.lock().push(request);

		let reply = self.reply;

		Box::pin(async move {
			match reply {
				Some((status, body)) =>
					Ok(TransportResponse { status, body: body.as_bytes().to_vec() }),
				None => Err(FakeTransportError::Refused),
			}
		})
	}
}

fn client(transport: Arc<RecordingTransport>) -> TokenClient<RecordingTransport> {
	let credentials =
		Credentials::new("svc-key", "svc-secret").expect("Fake credentials should be valid.");
	let config = ClientConfig::production().expect("Production config should validate.");

	TokenClient::with_http_client(credentials, config, transport)
}

fn recorded_body(transport: &RecordingTransport) -> Value {
	let requests = transport.recorded();

	assert_eq!(requests.len(), 1, "Exactly one request should be sent per call.");

	serde_json::from_slice(&requests[0].body).expect("Recorded body should be valid JSON.")
}

#[tokio::test]
async fn payload_carries_credentials_and_options() {
	let transport = Arc::new(RecordingTransport::replying(200, "{\"token\":\"tok\"}"));
	let client = client(transport.clone());
	let options = TokenRequestOptions::default()
		.with_user_id("patient-7")
		.with_expires_in(Duration::seconds(90))
		.with_test_mode(true);
	let response = client.request_token_with(&options).await.expect("Fake reply carries a token.");

	assert_eq!(response.expose(), "tok");
	assert_eq!(
		recorded_body(&transport),
		json!({
			"id": "svc-key",
			"secret": "svc-secret",
			"user-id": "patient-7",
			"expires-in": 90_000_000_000_i64,
			"test-mode": true,
		})
	);

	let request = &transport.recorded()[0];

	assert_eq!(request.url.as_str(), "https://api.set.health/token");
	assert_eq!(request.timeout, Some(Duration::seconds(30)));
}

#[tokio::test]
async fn default_call_equals_explicit_defaults() {
	let implicit = Arc::new(RecordingTransport::replying(200, "{\"token\":\"a\"}"));
	let explicit = Arc::new(RecordingTransport::replying(200, "{\"token\":\"a\"}"));

	client(implicit.clone()).request_token().await.expect("Implicit defaults should succeed.");
	client(explicit.clone())
		.request_token_with(&TokenRequestOptions::new("", 0, false))
		.await
		.expect("Explicit defaults should succeed.");

	assert_eq!(recorded_body(&implicit), recorded_body(&explicit));
	assert_eq!(implicit.recorded()[0].body, explicit.recorded()[0].body);
}

#[tokio::test]
async fn transport_failure_wraps_cause() {
	let transport = Arc::new(RecordingTransport::refusing());
	let err = client(transport.clone())
		.request_token()
		.await
		.expect_err("Refused connections should fail.");

	match &err {
		Error::Auth(AuthError::Transport { source }) => {
			assert!(source.downcast_ref::<FakeTransportError>().is_some());
			assert_eq!(source.to_string(), "Connection refused.");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	assert_eq!(transport.recorded().len(), 1);
}

#[tokio::test]
async fn null_token_is_rejected() {
	let transport = Arc::new(RecordingTransport::replying(200, "{\"token\":null}"));
	let err = client(transport).request_token().await.expect_err("Null tokens should fail.");

	assert!(matches!(err, Error::Auth(AuthError::MissingToken { status: 200 })));
}

#[tokio::test]
async fn custom_config_routes_to_custom_endpoint() {
	let transport = Arc::new(RecordingTransport::replying(200, "{\"token\":\"staging\"}"));
	let config = ClientConfig::builder()
		.base_url("https://staging.set.health/api/")
		.without_timeout()
		.build()
		.expect("Staging config should validate.");
	let client = client(transport.clone()).with_config(config);

	assert_eq!(client.token_endpoint().as_str(), "https://staging.set.health/api/token");

	client.request_token().await.expect("Staging request should succeed.");

	let request = &transport.recorded()[0];

	assert_eq!(request.url.as_str(), "https://staging.set.health/api/token");
	assert_eq!(request.timeout, None);
}

#[test]
fn debug_output_hides_secret() {
	let client = client(Arc::new(RecordingTransport::default()));
	let rendered = format!("{client:?}");

	assert!(rendered.contains("svc-key"));
	assert!(!rendered.contains("svc-secret"));
}
