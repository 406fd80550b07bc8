//! Client configuration: endpoint, timeout, status handling, and credential variable names.

// self
use crate::{
	_prelude::*,
	auth::{KEY_ENV, SECRET_ENV},
	error::ConfigError,
};

/// Production host of the Sethealth API.
pub const DEFAULT_BASE_URL: &str = "https://api.set.health";
/// Path segment of the token endpoint, relative to the base URL.
pub const TOKEN_PATH: &str = "token";
/// Default bound applied to every token request.
pub const DEFAULT_TIMEOUT: Duration = Duration::seconds(30);

/// How the client treats the HTTP status of token responses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusPolicy {
	/// Non-2xx responses fail with [`AuthError::Rejected`](crate::error::AuthError::Rejected).
	#[default]
	Enforce,
	/// Status is ignored; any body carrying a token is accepted.
	Ignore,
}

/// Validated client settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// Base URL of the API.
	pub base_url: Url,
	/// Token endpoint derived from [`Self::base_url`].
	pub token_endpoint: Url,
	/// Per-request timeout; `None` leaves the transport default in place.
	pub timeout: Option<Duration>,
	/// HTTP status handling.
	pub status_policy: StatusPolicy,
	/// Environment variable holding the service account key.
	pub key_var: String,
	/// Environment variable holding the service account secret.
	pub secret_var: String,
}
impl ClientConfig {
	/// Returns a builder seeded with production defaults.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	/// Production configuration.
	pub fn production() -> Result<Self, ConfigError> {
		Self::builder().build()
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// Base URL, kept raw until [`Self::build`].
	pub base_url: String,
	/// Per-request timeout.
	pub timeout: Option<Duration>,
	/// HTTP status handling.
	pub status_policy: StatusPolicy,
	/// Accept plain `http` base URLs (local mocks and proxies).
	pub allow_insecure_http: bool,
	/// Environment variable holding the service account key.
	pub key_var: String,
	/// Environment variable holding the service account secret.
	pub secret_var: String,
}
impl Default for ClientConfigBuilder {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.into(),
			timeout: Some(DEFAULT_TIMEOUT),
			status_policy: StatusPolicy::default(),
			allow_insecure_http: false,
			key_var: KEY_ENV.into(),
			secret_var: SECRET_ENV.into(),
		}
	}
}
impl ClientConfigBuilder {
	/// Overrides the base URL (the token path is appended to it).
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = url.into();

		self
	}

	/// Sets the per-request timeout.
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Leaves request timing to the transport.
	pub fn without_timeout(mut self) -> Self {
		self.timeout = None;

		self
	}

	/// Overrides the status policy.
	pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
		self.status_policy = policy;

		self
	}

	/// Allows or forbids plain `http` base URLs.
	pub fn allow_insecure_http(mut self, allow: bool) -> Self {
		self.allow_insecure_http = allow;

		self
	}

	/// Overrides the environment variable names used by
	/// [`TokenClient::from_environment`](crate::client::TokenClient::from_environment).
	pub fn credential_vars(
		mut self,
		key_var: impl Into<String>,
		secret_var: impl Into<String>,
	) -> Self {
		self.key_var = key_var.into();
		self.secret_var = secret_var.into();

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let base_url = Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidEndpoint {
			url: self.base_url.clone(),
			source: Some(source),
		})?;

		match base_url.scheme() {
			"https" => {},
			"http" if self.allow_insecure_http => {},
			"http" => return Err(ConfigError::InsecureEndpoint { url: base_url.into() }),
			_ => return Err(ConfigError::InvalidEndpoint { url: base_url.into(), source: None }),
		}

		if self.timeout.is_some_and(|timeout| !timeout.is_positive()) {
			return Err(ConfigError::InvalidTimeout);
		}

		let token_endpoint = token_endpoint_for(&base_url)?;

		Ok(ClientConfig {
			base_url,
			token_endpoint,
			timeout: self.timeout,
			status_policy: self.status_policy,
			key_var: self.key_var,
			secret_var: self.secret_var,
		})
	}
}

fn token_endpoint_for(base_url: &Url) -> Result<Url, ConfigError> {
	let mut endpoint = base_url.clone();

	endpoint.set_query(None);
	endpoint.set_fragment(None);
	endpoint
		.path_segments_mut()
		.map_err(|_| ConfigError::InvalidEndpoint { url: base_url.to_string(), source: None })?
		.pop_if_empty()
		.push(TOKEN_PATH);

	Ok(endpoint)
}
