use uuid::Uuid;

use merit_storage::{
	models::{AdmissionRecord, StudentRecord},
	queries,
};

use crate::{MeritService, ServiceError, ServiceResult};

/// Boundary shape of an admission row. Handlers serialize this, never the
/// raw store row.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AdmissionItem {
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
	#[serde(with = "crate::time_serde")]
	pub created_at: time::OffsetDateTime,
}
impl From<AdmissionRecord> for AdmissionItem {
	fn from(record: AdmissionRecord) -> Self {
		Self {
			id: record.id,
			sr_no: record.sr_no,
			merit_no: record.merit_no,
			mht_cet_score: record.mht_cet_score,
			application_id: record.application_id,
			full_name: record.full_name,
			gender: record.gender,
			category: record.category,
			seat_type: record.seat_type,
			branch: record.branch,
			college: record.college,
			city: record.city,
			seat_level: record.seat_level,
			status: record.status,
			admitted: record.admitted,
			created_at: record.created_at,
		}
	}
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StudentItem {
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
}
impl From<StudentRecord> for StudentItem {
	fn from(record: StudentRecord) -> Self {
		Self {
			id: record.id,
			application_id: record.application_id,
			name: record.name,
			surname: record.surname,
			email: record.email,
			father_name: record.father_name,
			occupation: record.occupation,
			category: record.category,
			religion: record.religion,
			subcast: record.subcast,
			image_url: record.image_url,
			github_url: record.github_url,
			twitter_url: record.twitter_url,
			linkedin_url: record.linkedin_url,
			instagram_url: record.instagram_url,
		}
	}
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct AdmissionDetail {
	#[serde(flatten)]
	pub admission: AdmissionItem,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub student_details: Option<StudentItem>,
}

impl MeritService {
	/// Fetches one admission record and merges the related student record
	/// when the secondary lookup finds one. The association is best effort:
	/// a missing or failing student lookup never fails the request.
	pub async fn admission_detail(&self, id: Uuid) -> ServiceResult<AdmissionDetail> {
		let Some(admission) = queries::admission_by_id(&self.db, id).await? else {
			return Err(ServiceError::NotFound {
				message: "Admission record not found.".to_string(),
			});
		};
		let student_details = match admission.application_id.as_deref() {
			Some(application_id) if !application_id.trim().is_empty() => {
				match queries::student_by_application_id(&self.db, application_id).await {
					Ok(student) => student.map(StudentItem::from),
					Err(err) => {
						tracing::warn!(error = %err, "Failed to fetch related student record.");

						None
					},
				}
			},
			_ => None,
		};

		Ok(AdmissionDetail { admission: AdmissionItem::from(admission), student_details })
	}
}
