use serde_json::Value;

use merit_domain::{avatar, persona, seed};
use merit_providers::avatar as avatar_api;

use crate::{MeritService, ServiceError, ServiceResult};

const DEFAULT_AVATAR_SIZE: u32 = 200;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarFormat {
	#[default]
	Json,
	Svg,
}
impl AvatarFormat {
	pub fn parse(raw: &str) -> Self {
		if raw.trim().eq_ignore_ascii_case("svg") { Self::Svg } else { Self::Json }
	}
}

#[derive(Debug, Clone)]
pub struct AvatarRequest {
	pub seed: String,
	pub format: AvatarFormat,
}

#[derive(Debug, Clone)]
pub enum AvatarResult {
	/// Raw `image/svg+xml` markup.
	Svg(String),
	/// JSON envelope with the markup and an embeddable data URL.
	Json(Value),
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PersonaAvatarRequest {
	pub seed: String,
	pub gender: Option<String>,
	pub size: Option<u32>,
}

impl MeritService {
	/// Locally generated avatar; no network involved. The seed is required
	/// because the output must be reproducible.
	pub fn avatar(&self, req: AvatarRequest) -> ServiceResult<AvatarResult> {
		let seed_text = req.seed.trim();

		if seed_text.is_empty() {
			return Err(ServiceError::InvalidRequest {
				message: "Seed parameter is required.".to_string(),
			});
		}

		let svg = avatar::render_svg(seed_text);

		if svg.is_empty() {
			return Ok(AvatarResult::Json(serde_json::json!({
				"imageUrl": avatar::substitute_image_url(seed_text, 100),
				"seed": seed_text,
				"fallback": true,
				"error": "Failed to generate avatar",
			})));
		}

		match req.format {
			AvatarFormat::Svg => Ok(AvatarResult::Svg(svg)),
			AvatarFormat::Json => Ok(AvatarResult::Json(serde_json::json!({
				"svg": svg,
				"dataUrl": avatar::svg_to_data_url(&svg),
				"seed": seed_text,
				"success": true,
			}))),
		}
	}

	/// Remote avatar generation. All style parameters derive from the seed,
	/// and a provider failure degrades to a substitute-service URL instead
	/// of an error.
	pub async fn persona_avatar(&self, req: PersonaAvatarRequest) -> ServiceResult<Value> {
		let seed_text = req.seed.trim();

		if seed_text.is_empty() {
			return Err(ServiceError::InvalidRequest {
				message: "Seed parameter is required.".to_string(),
			});
		}

		let size = req.size.unwrap_or(DEFAULT_AVATAR_SIZE).clamp(16, 1_024);
		let hash = seed::seed_hash(seed_text);
		let gender = persona::resolve_gender(hash, req.gender.as_deref());
		let params = avatar_api::derive_params(seed_text, gender, size);

		match self.providers.avatar.generate(&self.cfg.providers.avatar, &params).await {
			Ok(value) => Ok(value),
			Err(err) => {
				tracing::warn!(error = %err, "Avatar provider failed; using substitute URL.");

				Ok(serde_json::json!({
					"imageUrl": avatar::substitute_avatar_url(seed_text, size),
					"fallback": true,
					"message": "Using substitute avatar service.",
				}))
			},
		}
	}
}
