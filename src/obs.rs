//! Optional observability helpers for token requests.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run every request inside a `sethealth.token` span carrying a `stage`
//!   field, and to log outcomes (`debug` on success, `warn` on failure).
//! - Enable `metrics` to increment the `sethealth_token_request_total` counter for every
//!   attempt/success/failure, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each token request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to a token request.
	Attempt,
	/// A token was issued.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
