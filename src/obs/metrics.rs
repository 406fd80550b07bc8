// self
use crate::obs::RequestOutcome;

/// Records a request outcome via the global metrics recorder (when enabled).
pub fn record_token_request(outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("sethealth_token_request_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}
