use serde_json::Value;

use merit_domain::persona;

use crate::{MeritService, ServiceResult};

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct PersonaNameRequest {
	pub gender: Option<String>,
	pub seed: Option<String>,
}

impl MeritService {
	/// Person-name generation with graceful degradation: a provider failure
	/// yields a name from the built-in tables, chosen by the request's seed
	/// so the substitute is stable.
	pub async fn persona_name(&self, req: PersonaNameRequest) -> ServiceResult<Value> {
		let gender = req.gender.as_deref().map(str::trim).filter(|value| !value.is_empty());

		match self.providers.persona.name(&self.cfg.providers.persona, gender).await {
			Ok(value) => Ok(value),
			Err(err) => {
				tracing::warn!(error = %err, "Name provider failed; using fallback name.");

				let seed_text = req
					.seed
					.as_deref()
					.map(str::trim)
					.filter(|value| !value.is_empty())
					.or(gender)
					.unwrap_or("persona");
				let name = persona::fallback_name(seed_text, gender);

				Ok(serde_json::json!({
					"firstName": name.first_name,
					"lastName": name.last_name,
					"fullName": name.full_name,
					"email": name.email,
					"gender": name.gender,
					"fallback": true,
				}))
			},
		}
	}
}
