use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use merit_domain::{
	page::PageWindow,
	query::{SearchFilter, SortDirection, SortField},
};

use crate::{
	Result,
	db::Db,
	models::{AdmissionRecord, NewStudent, StudentRecord},
};

const ADMISSION_COLUMNS: &str = "id, sr_no, merit_no, mht_cet_score, application_id, full_name, \
	gender, category, seat_type, branch, college, city, seat_level, status, admitted, created_at";
const STUDENT_COLUMNS: &str = "id, application_id, name, surname, email, father_name, occupation, \
	category, religion, subcast, image_url, github_url, twitter_url, linkedin_url, instagram_url, \
	created_at";

pub async fn count_admissions(db: &Db, filter: Option<&SearchFilter>) -> Result<i64> {
	let mut builder = QueryBuilder::new("SELECT count(*) FROM admission_records");

	if let Some(filter) = filter {
		push_filter(&mut builder, filter);
	}

	let count: i64 = builder.build_query_scalar().fetch_one(&db.pool).await?;

	Ok(count)
}

pub async fn search_admissions(
	db: &Db,
	filter: Option<&SearchFilter>,
	sort_field: SortField,
	sort_direction: SortDirection,
	window: PageWindow,
) -> Result<Vec<AdmissionRecord>> {
	let mut builder =
		QueryBuilder::new(format!("SELECT {ADMISSION_COLUMNS} FROM admission_records"));

	if let Some(filter) = filter {
		push_filter(&mut builder, filter);
	}

	// The sort column comes from the allow-list enum, never from user input.
	builder.push(" ORDER BY ");
	builder.push(sort_field.as_column());
	builder.push(" ");
	builder.push(sort_direction.as_sql());
	builder.push(" LIMIT ");
	builder.push_bind(window.limit());
	builder.push(" OFFSET ");
	builder.push_bind(window.offset());

	let rows: Vec<AdmissionRecord> = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(rows)
}

pub async fn admission_by_id(db: &Db, id: Uuid) -> Result<Option<AdmissionRecord>> {
	let row = sqlx::query_as::<_, AdmissionRecord>(&format!(
		"SELECT {ADMISSION_COLUMNS} FROM admission_records WHERE id = $1"
	))
	.bind(id)
	.fetch_optional(&db.pool)
	.await?;

	Ok(row)
}

pub async fn student_by_application_id(
	db: &Db,
	application_id: &str,
) -> Result<Option<StudentRecord>> {
	let row = sqlx::query_as::<_, StudentRecord>(&format!(
		"SELECT {STUDENT_COLUMNS} FROM student_records WHERE application_id = $1 LIMIT 1"
	))
	.bind(application_id)
	.fetch_optional(&db.pool)
	.await?;

	Ok(row)
}

pub async fn insert_students(db: &Db, rows: &[NewStudent]) -> Result<u64> {
	if rows.is_empty() {
		return Ok(0);
	}

	let mut builder = QueryBuilder::new(
		"INSERT INTO student_records (application_id, name, surname, email, father_name, \
		 occupation, category, religion, subcast, image_url, github_url, twitter_url, \
		 linkedin_url, instagram_url)",
	);

	builder.push_values(rows, |mut values, row| {
		values
			.push_bind(row.application_id.as_deref())
			.push_bind(row.name.as_str())
			.push_bind(row.surname.as_deref())
			.push_bind(row.email.as_deref())
			.push_bind(row.father_name.as_deref())
			.push_bind(row.occupation.as_deref())
			.push_bind(row.category.as_deref())
			.push_bind(row.religion.as_deref())
			.push_bind(row.subcast.as_deref())
			.push_bind(row.image_url.as_deref())
			.push_bind(row.github_url.as_deref())
			.push_bind(row.twitter_url.as_deref())
			.push_bind(row.linkedin_url.as_deref())
			.push_bind(row.instagram_url.as_deref());
	});

	let result = builder.build().execute(&db.pool).await?;

	Ok(result.rows_affected())
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &SearchFilter) {
	builder.push(" WHERE ");

	for (index, predicate) in filter.predicates.iter().enumerate() {
		if index > 0 {
			builder.push(" OR ");
		}

		builder.push(predicate.column);
		builder.push(" ILIKE ");
		builder.push_bind(like_pattern(&predicate.needle));
	}
}

/// Wraps the needle in wildcards, escaping LIKE metacharacters so the user's
/// input always matches literally.
fn like_pattern(needle: &str) -> String {
	let mut pattern = String::with_capacity(needle.len() + 2);

	pattern.push('%');

	for ch in needle.chars() {
		if matches!(ch, '\\' | '%' | '_') {
			pattern.push('\\');
		}

		pattern.push(ch);
	}

	pattern.push('%');

	pattern
}
