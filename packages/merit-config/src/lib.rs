mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	AvatarProviderConfig, Config, EnrichmentProviderConfig, Import, PersonaProviderConfig, Postgres,
	Providers, Search, Security, Service, Storage,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.admin_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.admin_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.search.default_page_size == 0 {
		return Err(Error::Validation {
			message: "search.default_page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.search.max_page_size < cfg.search.default_page_size {
		return Err(Error::Validation {
			message: "search.max_page_size must be at least search.default_page_size.".to_string(),
		});
	}
	if cfg.import.batch_size == 0 {
		return Err(Error::Validation {
			message: "import.batch_size must be greater than zero.".to_string(),
		});
	}
	if cfg.providers.enrichment.api_key.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.enrichment.api_key must be non-empty.".to_string(),
		});
	}

	for (label, api_base) in [
		("enrichment", &cfg.providers.enrichment.api_base),
		("avatar", &cfg.providers.avatar.api_base),
		("persona", &cfg.providers.persona.api_base),
	] {
		if api_base.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("Provider {label} api_base must be non-empty."),
			});
		}
	}
	for (label, timeout_ms) in [
		("enrichment", cfg.providers.enrichment.timeout_ms),
		("avatar", cfg.providers.avatar.timeout_ms),
		("persona", cfg.providers.persona.timeout_ms),
	] {
		if timeout_ms == 0 {
			return Err(Error::Validation {
				message: format!("Provider {label} timeout_ms must be greater than zero."),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	for api_base in [
		&mut cfg.providers.enrichment.api_base,
		&mut cfg.providers.avatar.api_base,
		&mut cfg.providers.persona.api_base,
	] {
		while api_base.ends_with('/') {
			api_base.pop();
		}
	}
}
