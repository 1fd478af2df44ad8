use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{AuthScheme, Error, Result};

/// One enrichment attempt with one auth scheme. Non-2xx responses become
/// [`Error::Upstream`] so the caller can either relay the status or move on
/// to the next scheme.
pub async fn lookup(
	cfg: &merit_config::EnrichmentProviderConfig,
	api_key: &str,
	scheme: AuthScheme,
	email: &str,
) -> Result<Value> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let res = client
		.get(url)
		.headers(scheme.headers(api_key)?)
		.query(&[("email", email)])
		.send()
		.await?;
	let status = res.status();

	if !status.is_success() {
		let body = res.text().await.unwrap_or_default();

		return Err(Error::Upstream { status: status.as_u16(), body });
	}

	Ok(res.json().await?)
}

/// An upstream "success" with no person or company payload means the email
/// is unknown to the provider; callers treat that like a downstream miss.
pub fn response_is_empty(value: &Value) -> bool {
	let has_content = |key: &str| {
		value.get(key).and_then(Value::as_object).map(|obj| !obj.is_empty()).unwrap_or(false)
	};

	!has_content("person") && !has_content("company")
}
