//! Async client for the Sethealth token API: validated service-account credentials, a single
//! JSON token exchange, and typed configuration/authentication errors.
//!
//! ```no_run
//! # async fn demo() -> sethealth::error::Result<()> {
//! use sethealth::{client::ReqwestTokenClient, request::TokenRequestOptions};
//!
//! let client = ReqwestTokenClient::from_environment()?;
//! let options = TokenRequestOptions::default().with_user_id("patient-7").with_test_mode(true);
//! let response = client.request_token_with(&options).await?;
//!
//! println!("issued {} bytes of token", response.expose().len());
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod request;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration as StdDuration,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::Duration;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use time;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, parking_lot as _};
