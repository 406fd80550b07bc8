//! Client-level error types shared across construction, transport, and response handling.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem detected before any network activity.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The token exchange with the remote service failed.
	#[error(transparent)]
	Auth(#[from] AuthError),
}
impl Error {
	/// Returns `true` when the error was raised while configuring the client.
	pub fn is_config(&self) -> bool {
		matches!(self, Self::Config(_))
	}

	/// Returns `true` when the error was raised by a token request.
	pub fn is_auth(&self) -> bool {
		matches!(self, Self::Auth(_))
	}
}

/// Configuration and validation failures raised while building a client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Service account key is absent or empty.
	#[error("Service account key is missing (check {var}).")]
	MissingKey {
		/// Environment variable consulted for the key.
		var: String,
	},
	/// Service account secret is absent or empty.
	#[error("Service account secret is missing (check {var}).")]
	MissingSecret {
		/// Environment variable consulted for the secret.
		var: String,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed or cannot carry the token path.
	#[error("Base URL `{url}` is invalid.")]
	InvalidEndpoint {
		/// Offending URL.
		url: String,
		/// Underlying parsing failure, when one exists.
		#[source]
		source: Option<url::ParseError>,
	},
	/// Base URL does not use HTTPS and insecure HTTP was not allowed.
	#[error("The token endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Offending URL.
		url: String,
	},
	/// Request timeout must be positive.
	#[error("Request timeout must be positive.")]
	InvalidTimeout,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Token request failures; the service did not hand out a usable token.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// Request payload could not be serialized.
	#[error("Token request payload could not be encoded.")]
	Encode(#[source] serde_json::Error),
	/// Underlying HTTP client reported a failure (DNS, TCP, TLS, timeout, body read).
	#[error("Network error occurred while calling the token endpoint.")]
	Transport {
		/// Transport-specific failure.
		#[source]
		source: BoxError,
	},
	/// Token endpoint answered with a non-success HTTP status.
	#[error("Token endpoint rejected the request with HTTP {status}.")]
	Rejected {
		/// HTTP status code returned by the endpoint.
		status: u16,
		/// Leading part of the response body, for diagnostics.
		body_preview: String,
	},
	/// Token endpoint responded with a body that is not the expected JSON object.
	#[error("Token endpoint returned a malformed response.")]
	MalformedResponse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Token endpoint appended data after the JSON object.
	#[error("Token endpoint returned trailing data after the JSON response.")]
	TrailingData {
		/// Parser failure at the first trailing character.
		#[source]
		source: serde_json::Error,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Token endpoint returned no token, a `null` token, or an empty one.
	#[error("Token endpoint response does not contain a token.")]
	MissingToken {
		/// HTTP status code of the response.
		status: u16,
	},
}
impl AuthError {
	/// Wraps a transport-specific failure.
	pub fn transport(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Transport { source: Box::new(src) }
	}

	/// HTTP status code associated with the failure, when a response was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Rejected { status, .. }
			| Self::MalformedResponse { status, .. }
			| Self::TrailingData { status, .. }
			| Self::MissingToken { status } => Some(*status),
			Self::Encode(_) | Self::Transport { .. } => None,
		}
	}
}
