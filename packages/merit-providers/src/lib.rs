pub mod avatar;
pub mod enrichment;
pub mod persona;

mod error;

pub use error::{Error, Result};

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

/// One way of presenting the API key to the enrichment endpoint. The service
/// walks [`AUTH_SEQUENCE`] in order and stops at the first scheme that the
/// upstream accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthScheme {
	/// `X-Api-Key: <key>`
	ApiKeyHeader,
	/// `Authorization: Bearer <key>`
	Bearer,
	/// `Authorization: <key>`
	Plain,
}
impl AuthScheme {
	pub fn headers(self, api_key: &str) -> Result<HeaderMap> {
		let mut headers = HeaderMap::new();

		headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

		match self {
			Self::ApiKeyHeader => {
				headers.insert("X-Api-Key", api_key.parse()?);
			},
			Self::Bearer => {
				headers.insert(AUTHORIZATION, format!("Bearer {api_key}").parse()?);
			},
			Self::Plain => {
				headers.insert(AUTHORIZATION, api_key.parse()?);
			},
		}

		Ok(headers)
	}
}

pub const AUTH_SEQUENCE: [AuthScheme; 3] =
	[AuthScheme::ApiKeyHeader, AuthScheme::Bearer, AuthScheme::Plain];
