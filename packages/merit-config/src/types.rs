use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub providers: Providers,
	pub search: Search,
	pub import: Import,
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub admin_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub enrichment: EnrichmentProviderConfig,
	pub avatar: AvatarProviderConfig,
	pub persona: PersonaProviderConfig,
}

/// Email-intelligence API. The key configured here is the startup value; it
/// can be replaced at runtime through the admin endpoint.
#[derive(Debug, Deserialize)]
pub struct EnrichmentProviderConfig {
	pub api_base: String,
	pub path: String,
	pub api_key: String,
	pub timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct AvatarProviderConfig {
	pub api_base: String,
	pub path: String,
	pub timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct PersonaProviderConfig {
	pub api_base: String,
	pub path: String,
	pub timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct Search {
	#[serde(default = "default_page_size")]
	pub default_page_size: u32,
	#[serde(default = "default_max_page_size")]
	pub max_page_size: u32,
}

#[derive(Debug, Deserialize)]
pub struct Import {
	#[serde(default = "default_batch_size")]
	pub batch_size: u32,
}

#[derive(Debug, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
}

fn default_page_size() -> u32 {
	10
}

fn default_max_page_size() -> u32 {
	100
}

fn default_batch_size() -> u32 {
	100
}
