use merit_storage::{models::NewStudent, queries};

use crate::{MeritService, ServiceResult};

#[derive(Debug, Clone)]
pub struct ImportRequest {
	/// Raw CSV text: one student per line, fixed column positions, no header.
	pub body: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ImportResponse {
	pub imported: usize,
	pub skipped: usize,
}

impl MeritService {
	/// Bulk student import. Rows lacking a name are skipped and counted;
	/// the rest are inserted in config-sized batches.
	pub async fn import_students(&self, req: ImportRequest) -> ServiceResult<ImportResponse> {
		let (rows, skipped) = parse_rows(&req.body);
		let mut imported = 0_usize;

		for chunk in rows.chunks(self.cfg.import.batch_size.max(1) as usize) {
			imported += queries::insert_students(&self.db, chunk).await? as usize;
		}

		tracing::info!(imported, skipped, "Student CSV import completed.");

		Ok(ImportResponse { imported, skipped })
	}
}

/// Columns, in order: name, surname, email, father_name, occupation,
/// category, religion, subcast, image_url, github_url, twitter_url,
/// linkedin_url, instagram_url.
fn parse_rows(text: &str) -> (Vec<NewStudent>, usize) {
	let mut rows = Vec::new();
	let mut skipped = 0;

	for line in text.lines() {
		if line.trim().is_empty() {
			continue;
		}

		let columns: Vec<&str> = line.split(',').map(str::trim).collect();
		let column =
			|index: usize| columns.get(index).filter(|value| !value.is_empty()).map(|value| value.to_string());
		let Some(name) = column(0) else {
			skipped += 1;

			continue;
		};

		rows.push(NewStudent {
			application_id: None,
			name,
			surname: column(1),
			email: column(2),
			father_name: column(3),
			occupation: column(4),
			category: column(5),
			religion: column(6),
			subcast: column(7),
			image_url: column(8),
			github_url: column(9),
			twitter_url: column(10),
			linkedin_url: column(11),
			instagram_url: column(12),
		});
	}

	(rows, skipped)
}
