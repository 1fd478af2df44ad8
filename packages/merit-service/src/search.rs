use merit_domain::{
	page::{PageMeta, PageWindow},
	query::{self, SortDirection, SortField},
};
use merit_storage::queries;

use crate::{MeritService, ServiceResult, record::AdmissionItem};

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
	pub search: String,
	pub page: Option<i64>,
	pub page_size: Option<i64>,
	pub sort_by: Option<String>,
	pub sort_order: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SearchResponse {
	pub data: Vec<AdmissionItem>,
	pub metadata: PageMeta,
}

impl MeritService {
	/// Free-text search over admission records. The whole operation fails on
	/// a store error; there is no partial result.
	pub async fn search(&self, req: SearchRequest) -> ServiceResult<SearchResponse> {
		let filter = query::build_filter(&req.search);
		let sort_field = req.sort_by.as_deref().map(SortField::parse).unwrap_or_default();
		let sort_direction =
			req.sort_order.as_deref().map(SortDirection::parse).unwrap_or_default();
		let window = PageWindow::new(
			req.page.unwrap_or(1),
			req.page_size.unwrap_or_else(|| i64::from(self.cfg.search.default_page_size)),
			self.cfg.search.max_page_size,
		);
		let total = queries::count_admissions(&self.db, filter.as_ref()).await?;
		let rows =
			queries::search_admissions(&self.db, filter.as_ref(), sort_field, sort_direction, window)
				.await?;

		tracing::debug!(
			total,
			page = window.page,
			page_size = window.page_size,
			"Admission search completed."
		);

		Ok(SearchResponse {
			data: rows.into_iter().map(AdmissionItem::from).collect(),
			metadata: PageMeta::new(total.max(0) as u64, window),
		})
	}
}
