use std::sync::Arc;

use merit_service::MeritService;
use merit_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<MeritService>,
}
impl AppState {
	pub async fn new(config: merit_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = MeritService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}
}
