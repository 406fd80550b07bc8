//! Token request options and the JSON payload sent to the token endpoint.

// self
use crate::{_prelude::*, auth::Credentials};

/// Per-call options for a token request.
///
/// The default value requests a token with no user binding, the service's default lifetime,
/// and production routing: `user_id = ""`, `expires_in = 0`, `test_mode = false`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenRequestOptions {
	/// End-user identifier the token is issued for.
	pub user_id: String,
	/// Token lifetime in nanoseconds; `0` lets the service pick. Negative values are sent as `0`.
	pub expires_in: i64,
	/// Routes the request to the non-production environment when `true`.
	pub test_mode: bool,
}
impl TokenRequestOptions {
	/// Creates options with every field set explicitly.
	pub fn new(user_id: impl Into<String>, expires_in: i64, test_mode: bool) -> Self {
		Self { user_id: user_id.into(), expires_in: expires_in.max(0), test_mode }
	}

	/// Binds the token to a user.
	pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
		self.user_id = user_id.into();

		self
	}

	/// Sets the lifetime in nanoseconds; negative values clamp to `0`.
	pub fn with_expires_in_nanos(mut self, nanos: i64) -> Self {
		self.expires_in = nanos.max(0);

		self
	}

	/// Sets the lifetime from a [`Duration`].
	///
	/// Negative durations clamp to `0`; durations past `i64::MAX` nanoseconds saturate.
	pub fn with_expires_in(mut self, lifetime: Duration) -> Self {
		self.expires_in = if lifetime.is_negative() {
			0
		} else {
			i64::try_from(lifetime.whole_nanoseconds()).unwrap_or(i64::MAX)
		};

		self
	}

	/// Toggles test-mode routing.
	pub fn with_test_mode(mut self, test_mode: bool) -> Self {
		self.test_mode = test_mode;

		self
	}
}

/// Wire payload posted to the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenRequestPayload<'a> {
	/// Service account key.
	pub id: &'a str,
	/// Service account secret.
	pub secret: &'a str,
	/// End-user identifier.
	#[serde(rename = "user-id")]
	pub user_id: &'a str,
	/// Token lifetime in nanoseconds.
	#[serde(rename = "expires-in")]
	pub expires_in: i64,
	/// Test-mode routing flag.
	#[serde(rename = "test-mode")]
	pub test_mode: bool,
}
impl<'a> TokenRequestPayload<'a> {
	/// Combines client credentials with per-call options.
	pub fn new(credentials: &'a Credentials, options: &'a TokenRequestOptions) -> Self {
		Self {
			id: credentials.key(),
			secret: credentials.secret().expose(),
			user_id: &options.user_id,
			expires_in: options.expires_in.max(0),
			test_mode: options.test_mode,
		}
	}

	/// Serializes the payload to JSON bytes.
	pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
		serde_json::to_vec(self)
	}
}
