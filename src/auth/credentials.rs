//! Immutable service-account credentials validated at construction.

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Environment variable holding the service account key.
pub const KEY_ENV: &str = "SETHEALTH_KEY";
/// Environment variable holding the service account secret.
pub const SECRET_ENV: &str = "SETHEALTH_SECRET";

/// Service-account key + secret pair used to authenticate token requests.
///
/// Both halves are guaranteed non-empty; the secret is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	key: String,
	secret: Secret,
}
impl Credentials {
	/// Validates and stores an explicit key + secret pair.
	pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self, ConfigError> {
		Self::validated(Some(key.into()), Some(secret.into()), KEY_ENV, SECRET_ENV)
	}

	/// Reads both halves through `lookup`, keyed by the provided variable names.
	///
	/// Absent and empty values are treated alike.
	pub fn from_lookup<F>(key_var: &str, secret_var: &str, lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		Self::validated(lookup(key_var), lookup(secret_var), key_var, secret_var)
	}

	/// Service account key, sent as the `id` field.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Service account secret.
	pub fn secret(&self) -> &Secret {
		&self.secret
	}

	fn validated(
		key: Option<String>,
		secret: Option<String>,
		key_var: &str,
		secret_var: &str,
	) -> Result<Self, ConfigError> {
		let key = key
			.filter(|value| !value.is_empty())
			.ok_or_else(|| ConfigError::MissingKey { var: key_var.to_owned() })?;
		let secret = secret
			.filter(|value| !value.is_empty())
			.ok_or_else(|| ConfigError::MissingSecret { var: secret_var.to_owned() })?;

		Ok(Self { key, secret: Secret::new(secret) })
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("key", &self.key)
			.field("secret", &self.secret)
			.finish()
	}
}
