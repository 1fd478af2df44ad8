use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{Error, Result};

/// Requests a generated person name. The upstream takes the gender as an
/// optional filter and always answers in English.
pub async fn name(
	cfg: &merit_config::PersonaProviderConfig,
	gender: Option<&str>,
) -> Result<Value> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let mut params: Vec<(&str, &str)> = vec![("language", "English")];

	if let Some(gender) = gender {
		params.push(("gender", gender));
	}

	let res = client.get(url).query(&params).send().await?;
	let status = res.status();

	if !status.is_success() {
		let body = res.text().await.unwrap_or_default();

		return Err(Error::Upstream { status: status.as_u16(), body });
	}

	Ok(res.json().await?)
}
