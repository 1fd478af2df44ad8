use serde_json::Value;

use merit_domain::{avatar, email, seed};
use merit_providers::{AUTH_SEQUENCE, AuthScheme, enrichment};

use crate::{MeritService, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct LookupRequest {
	pub email: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct EnrichRequest {
	pub email: String,
}

impl MeritService {
	/// Direct enrichment lookup. This endpoint has no meaningful local
	/// substitute, so an upstream rejection is relayed with its own status.
	pub async fn lookup(&self, req: LookupRequest) -> ServiceResult<Value> {
		let email = validated_email(&req.email)?;
		let api_key = self.enrichment_key();

		match self
			.providers
			.enrichment
			.lookup(&self.cfg.providers.enrichment, &api_key, AuthScheme::Bearer, email)
			.await
		{
			Ok(value) => Ok(value),
			Err(merit_providers::Error::Upstream { status, .. }) => Err(ServiceError::Upstream {
				status,
				message: format!("Error from external API: {status}"),
			}),
			Err(err) => Err(ServiceError::Downstream { message: err.to_string() }),
		}
	}

	/// Enrichment with graceful degradation: each auth scheme is tried in
	/// order, and any downstream failure (or an upstream answer with no
	/// data) degrades to the deterministic profile derived from the email.
	pub async fn enrich(&self, req: EnrichRequest) -> ServiceResult<Value> {
		let email = validated_email(&req.email)?;
		let api_key = self.enrichment_key();

		for scheme in AUTH_SEQUENCE {
			match self
				.providers
				.enrichment
				.lookup(&self.cfg.providers.enrichment, &api_key, scheme, email)
				.await
			{
				Ok(value) if enrichment::response_is_empty(&value) => {
					tracing::debug!(email, "Enrichment found no data; using fallback profile.");

					break;
				},
				Ok(mut value) => {
					if let Some(obj) = value.as_object_mut() {
						obj.insert("source".to_string(), Value::String("enrichment_api".to_string()));
					}

					return Ok(value);
				},
				Err(err) => {
					tracing::warn!(error = %err, ?scheme, "Enrichment attempt failed.");
				},
			}
		}

		Ok(fallback_profile(email))
	}
}

fn validated_email(raw: &str) -> ServiceResult<&str> {
	let trimmed = raw.trim();

	if trimmed.is_empty() {
		return Err(ServiceError::InvalidRequest {
			message: "Email parameter is required.".to_string(),
		});
	}
	if !email::is_valid_email(trimmed) {
		return Err(ServiceError::InvalidRequest { message: "Invalid email format.".to_string() });
	}

	Ok(trimmed)
}

/// Synthesizes a profile for the email when the enrichment service cannot.
/// Every varying value derives from the email hash, so repeated calls agree.
pub(crate) fn fallback_profile(email: &str) -> Value {
	let hash = seed::seed_hash(email);
	let (username, domain) = email.split_once('@').unwrap_or((email, "example.com"));
	let display_name = humanize_username(username);
	let mut parts = display_name.split_whitespace();
	let first_name = parts.next().unwrap_or("").to_string();
	let last_name = parts.next().unwrap_or("").to_string();
	let company = capitalize(domain.split('.').next().unwrap_or(domain));
	let identifier = username.to_lowercase().replace(['.', '_'], "");

	serde_json::json!({
		"success": true,
		"email": email,
		"emailType": if hash % 2 == 0 { "professional" } else { "personal" },
		"person": {
			"publicIdentifier": identifier,
			"firstName": first_name,
			"lastName": last_name,
			"headline": format!("Software Engineer at {company}"),
			"photoUrl": avatar::substitute_image_url(email, 300),
			"followerCount": 100 + seed::bounded(hash, 5_000),
			"openToWork": hash % 5 == 0,
		},
		"company": {
			"name": company,
			"universalName": company.to_lowercase(),
			"websiteUrl": format!("https://{domain}"),
			"employeeCount": 50 + seed::bounded(hash.rotate_right(8), 5_000),
			"industry": "Software Development",
		},
		"source": "fallback",
		"fallback": true,
	})
}

/// "abhishek.kumar" becomes "Abhishek Kumar".
fn humanize_username(username: &str) -> String {
	username
		.split(['.', '_', '-'])
		.filter(|part| !part.is_empty())
		.map(capitalize)
		.collect::<Vec<_>>()
		.join(" ")
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();

	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
