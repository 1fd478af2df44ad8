use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdmissionRecord {
	pub id: Uuid,
	pub sr_no: Option<i32>,
	pub merit_no: Option<i32>,
	pub mht_cet_score: Option<f64>,
	pub application_id: Option<String>,
	pub full_name: Option<String>,
	pub gender: Option<String>,
	pub category: Option<String>,
	pub seat_type: Option<String>,
	pub branch: Option<String>,
	pub college: Option<String>,
	pub city: Option<String>,
	pub seat_level: Option<String>,
	pub status: Option<String>,
	pub admitted: Option<String>,
	pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StudentRecord {
	pub id: Uuid,
	pub application_id: Option<String>,
	pub name: String,
	pub surname: Option<String>,
	pub email: Option<String>,
	pub father_name: Option<String>,
	pub occupation: Option<String>,
	pub category: Option<String>,
	pub religion: Option<String>,
	pub subcast: Option<String>,
	pub image_url: Option<String>,
	pub github_url: Option<String>,
	pub twitter_url: Option<String>,
	pub linkedin_url: Option<String>,
	pub instagram_url: Option<String>,
	pub created_at: OffsetDateTime,
}

/// Row shape accepted by the bulk student import; id and created_at are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
	pub application_id: Option<String>,
	pub name: String,
	pub surname: Option<String>,
	pub email: Option<String>,
	pub father_name: Option<String>,
	pub occupation: Option<String>,
	pub category: Option<String>,
	pub religion: Option<String>,
	pub subcast: Option<String>,
	pub image_url: Option<String>,
	pub github_url: Option<String>,
	pub twitter_url: Option<String>,
	pub linkedin_url: Option<String>,
	pub instagram_url: Option<String>,
}
