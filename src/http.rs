//! Transport primitives for token requests.
//!
//! [`TokenTransport`] is the client's only dependency on an HTTP stack. The default
//! implementation, [`ReqwestHttpClient`], wraps a `reqwest` client; tests and downstream
//! crates can supply their own implementation to stub the network or reuse an existing
//! connection pool.

// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")]
use crate::error::ConfigError;

/// Boxed, `Send` future returned by [`TokenTransport::post_json`].
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a + Send>>;

/// A JSON POST the transport must perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
	/// Absolute target URL.
	pub url: Url,
	/// Serialized JSON body.
	pub body: Vec<u8>,
	/// Upper bound on the whole exchange, if any.
	pub timeout: Option<Duration>,
}

/// Status and fully-read body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl TransportResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Abstraction over HTTP transports capable of posting a JSON token request.
///
/// Implementations must send the body with `Content-Type: application/json`, apply
/// [`TransportRequest::timeout`] when set, and return once the response body has been read
/// in full. Any status code is a successful transport outcome; status handling belongs to the
/// client. Implementations must be `Send + Sync + 'static` so clients can be shared across
/// tasks, and the returned futures must be `Send`.
pub trait TokenTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Posts `request` and resolves with the response status and body.
	fn post_json(
		&self,
		request: TransportRequest,
	) -> TransportFuture<'_, Result<TransportResponse, Self::TransportError>>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Token requests should not follow redirects: the endpoint answers directly, and a redirect
/// would replay the service secret to another URI. [`ReqwestHttpClient::new`] disables
/// redirects; configure any custom [`ReqwestClient`] passed to
/// [`ReqwestHttpClient::with_client`] the same way.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a reqwest client with redirects disabled.
	pub fn new() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().redirect(reqwest::redirect::Policy::none()).build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl TokenTransport for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn post_json(
		&self,
		request: TransportRequest,
	) -> TransportFuture<'_, Result<TransportResponse, Self::TransportError>> {
		use reqwest::header::{ACCEPT, CONTENT_TYPE};

		Box::pin(async move {
			let mut builder = self
				.0
				.post(request.url)
				.header(CONTENT_TYPE, "application/json")
				.header(ACCEPT, "application/json")
				.body(request.body);

			if let Some(timeout) =
				request.timeout.and_then(|value| StdDuration::try_from(value).ok())
			{
				builder = builder.timeout(timeout);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(TransportResponse { status, body })
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn success_covers_2xx_only() {
		let response = |status| TransportResponse { status, body: Vec::new() };

		assert!(response(200).is_success());
		assert!(response(204).is_success());
		assert!(!response(199).is_success());
		assert!(!response(301).is_success());
		assert!(!response(401).is_success());
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn reqwest_client_builds() {
		assert!(ReqwestHttpClient::new().is_ok());
	}
}
