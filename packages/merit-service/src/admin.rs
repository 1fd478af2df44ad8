use crate::{MeritService, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct UpdateApiKeyRequest {
	pub api_key: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct UpdateApiKeyResponse {
	pub success: bool,
	pub message: String,
}

impl MeritService {
	/// Replaces the active enrichment key in service state. The change lives
	/// until restart; persisting it is the operator's config file's job, not
	/// a request handler's.
	pub fn update_enrichment_key(
		&self,
		req: UpdateApiKeyRequest,
	) -> ServiceResult<UpdateApiKeyResponse> {
		let key = req.api_key.trim();

		if key.is_empty() {
			return Err(ServiceError::InvalidRequest {
				message: "API key is required.".to_string(),
			});
		}
		if !key.starts_with("sk_") || key.len() < 20 {
			return Err(ServiceError::InvalidRequest {
				message: "Invalid API key format. Keys start with \"sk_\" and are at least 20 characters long.".to_string(),
			});
		}

		self.set_enrichment_key(key.to_string());

		tracing::info!("Enrichment API key updated.");

		Ok(UpdateApiKeyResponse {
			success: true,
			message: "API key updated. Update the config file to persist it across restarts."
				.to_string(),
		})
	}
}
