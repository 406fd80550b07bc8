//! Token client: credential handling plus the single token exchange.
//!
//! [`TokenClient`] owns immutable [`Credentials`], a validated [`ClientConfig`], and a shared
//! [`TokenTransport`]. Each call to [`TokenClient::request_token_with`] performs exactly one
//! POST to the token endpoint; nothing is cached or retried, so concurrent calls on clones of
//! the same client are fully independent.

// self
use crate::{
	_prelude::*,
	auth::{Credentials, RawTokenResponse, TokenResponse},
	config::{ClientConfig, StatusPolicy},
	error::AuthError,
	http::{TokenTransport, TransportRequest, TransportResponse},
	obs::{self, RequestOutcome, RequestSpan},
	request::{TokenRequestOptions, TokenRequestPayload},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

const BODY_PREVIEW_LIMIT: usize = 256;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestTokenClient = TokenClient<ReqwestHttpClient>;

/// Client for the Sethealth token endpoint.
pub struct TokenClient<C>
where
	C: TokenTransport,
{
	credentials: Credentials,
	config: ClientConfig,
	http_client: Arc<C>,
}
impl<C> TokenClient<C>
where
	C: TokenTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		credentials: Credentials,
		config: ClientConfig,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { credentials, config, http_client: http_client.into() }
	}

	/// Replaces the configuration.
	pub fn with_config(mut self, config: ClientConfig) -> Self {
		self.config = config;

		self
	}

	/// Credentials sent with every request.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Active configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Endpoint every token request is posted to.
	pub fn token_endpoint(&self) -> &Url {
		&self.config.token_endpoint
	}

	/// Requests a token with default options (`user_id = ""`, `expires_in = 0`,
	/// `test_mode = false`).
	pub async fn request_token(&self) -> Result<TokenResponse> {
		self.request_token_with(&TokenRequestOptions::default()).await
	}

	/// Requests a token with the provided options.
	///
	/// Fails with [`Error::Auth`] when the transport fails, the endpoint rejects the request
	/// (under [`StatusPolicy::Enforce`]), the body is not the expected JSON object, or the
	/// response carries no token.
	pub async fn request_token_with(&self, options: &TokenRequestOptions) -> Result<TokenResponse> {
		let span = RequestSpan::new("request_token");

		obs::record_token_request(RequestOutcome::Attempt);

		let result = span.instrument(self.exchange(options)).await;

		obs::log_token_result(&result);

		match &result {
			Ok(_) => obs::record_token_request(RequestOutcome::Success),
			Err(_) => obs::record_token_request(RequestOutcome::Failure),
		}

		result
	}

	async fn exchange(&self, options: &TokenRequestOptions) -> Result<TokenResponse> {
		let body = TokenRequestPayload::new(&self.credentials, options)
			.to_json()
			.map_err(AuthError::Encode)?;
		let request = TransportRequest {
			url: self.config.token_endpoint.clone(),
			body,
			timeout: self.config.timeout,
		};
		let response = self.http_client.post_json(request).await.map_err(AuthError::transport)?;

		Ok(parse_token_response(response, self.config.status_policy)?)
	}
}
#[cfg(feature = "reqwest")]
impl TokenClient<ReqwestHttpClient> {
	/// Creates a client from the `SETHEALTH_KEY` and `SETHEALTH_SECRET` environment
	/// variables, targeting the production endpoint.
	pub fn from_environment() -> Result<Self> {
		let config = ClientConfig::production()?;
		let credentials = Credentials::from_lookup(&config.key_var, &config.secret_var, |name| {
			std::env::var(name).ok()
		})?;

		Self::with_reqwest(credentials, config)
	}

	/// Creates a client from credentials resolved through `lookup`.
	///
	/// Variable names come from `config` ([`ClientConfig::key_var`] and
	/// [`ClientConfig::secret_var`]), so tests can inject values without touching the process
	/// environment.
	pub fn from_lookup<F>(config: ClientConfig, lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let credentials = Credentials::from_lookup(&config.key_var, &config.secret_var, lookup)?;

		Self::with_reqwest(credentials, config)
	}

	/// Creates a client from an explicit key + secret pair, targeting the production endpoint.
	pub fn from_credentials(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
		let credentials = Credentials::new(key, secret)?;

		Self::with_reqwest(credentials, ClientConfig::production()?)
	}

	fn with_reqwest(credentials: Credentials, config: ClientConfig) -> Result<Self> {
		Ok(Self::with_http_client(credentials, config, ReqwestHttpClient::new()?))
	}
}
impl<C> Clone for TokenClient<C>
where
	C: TokenTransport,
{
	fn clone(&self) -> Self {
		Self {
			credentials: self.credentials.clone(),
			config: self.config.clone(),
			http_client: Arc::clone(&self.http_client),
		}
	}
}
impl<C> Debug for TokenClient<C>
where
	C: TokenTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenClient")
			.field("credentials", &self.credentials)
			.field("token_endpoint", &self.config.token_endpoint.as_str())
			.field("status_policy", &self.config.status_policy)
			.finish()
	}
}

fn parse_token_response(
	response: TransportResponse,
	policy: StatusPolicy,
) -> Result<TokenResponse, AuthError> {
	let status = response.status;

	if policy == StatusPolicy::Enforce && !response.is_success() {
		return Err(AuthError::Rejected { status, body_preview: body_preview(&response.body) });
	}

	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);
	let raw: RawTokenResponse = serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| AuthError::MalformedResponse { source, status })?;

	deserializer.end().map_err(|source| AuthError::TrailingData { source, status })?;

	raw.into_response().ok_or(AuthError::MissingToken { status })
}

fn body_preview(body: &[u8]) -> String {
	String::from_utf8_lossy(body).chars().take(BODY_PREVIEW_LIMIT).collect()
}
