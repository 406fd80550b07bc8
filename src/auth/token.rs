//! Token response returned by the Sethealth token endpoint.

// self
use crate::{_prelude::*, auth::Secret};

/// Short-lived token issued for client-side use.
///
/// Values returned by [`TokenClient`](crate::client::TokenClient) always carry a non-empty
/// token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
	/// Issued token; callers must avoid logging it.
	pub token: Secret,
}
impl TokenResponse {
	/// Wraps an issued token value.
	pub fn new(token: impl Into<String>) -> Self {
		Self { token: Secret::new(token) }
	}

	/// Returns the raw token string.
	pub fn expose(&self) -> &str {
		self.token.expose()
	}
}

/// Raw response shape; `token` may be absent or `null` on the wire.
#[derive(Debug, Deserialize)]
pub(crate) struct RawTokenResponse {
	#[serde(default)]
	pub(crate) token: Option<String>,
}
impl RawTokenResponse {
	/// Keeps the token only when present and non-empty.
	pub(crate) fn into_response(self) -> Option<TokenResponse> {
		self.token.filter(|token| !token.is_empty()).map(TokenResponse::new)
	}
}
