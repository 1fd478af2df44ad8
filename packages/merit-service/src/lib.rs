pub mod admin;
pub mod avatar;
pub mod enrich;
pub mod import;
pub mod persona;
pub mod record;
pub mod search;
pub mod time_serde;

use std::{
	future::Future,
	pin::Pin,
	sync::{Arc, RwLock},
};

use serde_json::Value;

pub use admin::{UpdateApiKeyRequest, UpdateApiKeyResponse};
pub use avatar::{AvatarFormat, AvatarRequest, AvatarResult, PersonaAvatarRequest};
pub use enrich::{EnrichRequest, LookupRequest};
pub use import::{ImportRequest, ImportResponse};
pub use persona::PersonaNameRequest;
pub use record::{AdmissionDetail, AdmissionItem, StudentItem};
pub use search::{SearchRequest, SearchResponse};

use merit_config::{AvatarProviderConfig, Config, EnrichmentProviderConfig, PersonaProviderConfig};
use merit_providers::AuthScheme;
use merit_storage::db::Db;

pub type ServiceResult<T> = Result<T, ServiceError>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait EnrichmentProvider
where
	Self: Send + Sync,
{
	fn lookup<'a>(
		&'a self,
		cfg: &'a EnrichmentProviderConfig,
		api_key: &'a str,
		scheme: AuthScheme,
		email: &'a str,
	) -> BoxFuture<'a, merit_providers::Result<Value>>;
}

pub trait AvatarProvider
where
	Self: Send + Sync,
{
	fn generate<'a>(
		&'a self,
		cfg: &'a AvatarProviderConfig,
		params: &'a [(&'static str, String)],
	) -> BoxFuture<'a, merit_providers::Result<Value>>;
}

pub trait PersonaProvider
where
	Self: Send + Sync,
{
	fn name<'a>(
		&'a self,
		cfg: &'a PersonaProviderConfig,
		gender: Option<&'a str>,
	) -> BoxFuture<'a, merit_providers::Result<Value>>;
}

#[derive(Debug)]
pub enum ServiceError {
	InvalidRequest { message: String },
	NotFound { message: String },
	Storage { message: String },
	Upstream { status: u16, message: String },
	Downstream { message: String },
}

#[derive(Clone)]
pub struct Providers {
	pub enrichment: Arc<dyn EnrichmentProvider>,
	pub avatar: Arc<dyn AvatarProvider>,
	pub persona: Arc<dyn PersonaProvider>,
}

pub struct MeritService {
	pub cfg: Config,
	pub db: Db,
	pub providers: Providers,
	enrichment_key: RwLock<String>,
}

struct DefaultProviders;

impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidRequest { message } => write!(f, "Invalid request: {message}"),
			Self::NotFound { message } => write!(f, "Not found: {message}"),
			Self::Storage { message } => write!(f, "Storage error: {message}"),
			Self::Upstream { status, message } => {
				write!(f, "Upstream error ({status}): {message}")
			},
			Self::Downstream { message } => write!(f, "Downstream error: {message}"),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<sqlx::Error> for ServiceError {
	fn from(err: sqlx::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<merit_storage::Error> for ServiceError {
	fn from(err: merit_storage::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl EnrichmentProvider for DefaultProviders {
	fn lookup<'a>(
		&'a self,
		cfg: &'a EnrichmentProviderConfig,
		api_key: &'a str,
		scheme: AuthScheme,
		email: &'a str,
	) -> BoxFuture<'a, merit_providers::Result<Value>> {
		Box::pin(merit_providers::enrichment::lookup(cfg, api_key, scheme, email))
	}
}

impl AvatarProvider for DefaultProviders {
	fn generate<'a>(
		&'a self,
		cfg: &'a AvatarProviderConfig,
		params: &'a [(&'static str, String)],
	) -> BoxFuture<'a, merit_providers::Result<Value>> {
		Box::pin(merit_providers::avatar::generate(cfg, params))
	}
}

impl PersonaProvider for DefaultProviders {
	fn name<'a>(
		&'a self,
		cfg: &'a PersonaProviderConfig,
		gender: Option<&'a str>,
	) -> BoxFuture<'a, merit_providers::Result<Value>> {
		Box::pin(merit_providers::persona::name(cfg, gender))
	}
}

impl Providers {
	pub fn new(
		enrichment: Arc<dyn EnrichmentProvider>,
		avatar: Arc<dyn AvatarProvider>,
		persona: Arc<dyn PersonaProvider>,
	) -> Self {
		Self { enrichment, avatar, persona }
	}
}

impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);
		Self { enrichment: provider.clone(), avatar: provider.clone(), persona: provider }
	}
}

impl MeritService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self::with_providers(cfg, db, Providers::default())
	}

	pub fn with_providers(cfg: Config, db: Db, providers: Providers) -> Self {
		let enrichment_key = RwLock::new(cfg.providers.enrichment.api_key.clone());

		Self { cfg, db, providers, enrichment_key }
	}

	/// The active enrichment key: the configured one until the admin
	/// operation replaces it.
	pub fn enrichment_key(&self) -> String {
		self.enrichment_key.read().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub(crate) fn set_enrichment_key(&self, key: String) {
		*self.enrichment_key.write().unwrap_or_else(|err| err.into_inner()) = key;
	}
}
