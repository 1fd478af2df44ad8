use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use merit_service::{
	AvatarFormat, AvatarRequest, AvatarResult, EnrichRequest, ImportRequest, ImportResponse,
	LookupRequest, PersonaAvatarRequest, PersonaNameRequest, SearchRequest, SearchResponse,
	ServiceError, UpdateApiKeyRequest, UpdateApiKeyResponse,
	record::AdmissionDetail,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/admissions", get(search))
		.route("/v1/admissions/{id}", get(admission_detail))
		.route("/v1/lookup", get(lookup))
		.route("/v1/enrichment", get(enrichment))
		.route("/v1/avatar", get(avatar))
		.route("/v1/persona/avatar", get(persona_avatar))
		.route("/v1/persona/name", get(persona_name).post(persona_name_post))
		.route("/v1/students/import", post(import_students))
		.with_state(state)
}

pub fn admin_router(state: AppState) -> Router {
	Router::new().route("/v1/admin/api_key", post(update_api_key)).with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search(
	State(state): State<AppState>,
	Query(params): Query<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search(params).await?;
	Ok(Json(response))
}

async fn admission_detail(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<Json<AdmissionDetail>, ApiError> {
	let response = state.service.admission_detail(id).await?;
	Ok(Json(response))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EmailParams {
	email: String,
}

async fn lookup(
	State(state): State<AppState>,
	Query(params): Query<EmailParams>,
) -> Result<Json<Value>, ApiError> {
	let response = state.service.lookup(LookupRequest { email: params.email }).await?;
	Ok(Json(response))
}

async fn enrichment(
	State(state): State<AppState>,
	Query(params): Query<EmailParams>,
) -> Result<Json<Value>, ApiError> {
	let response = state.service.enrich(EnrichRequest { email: params.email }).await?;
	Ok(Json(response))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AvatarParams {
	seed: String,
	format: String,
}

async fn avatar(
	State(state): State<AppState>,
	Query(params): Query<AvatarParams>,
) -> Result<Response, ApiError> {
	let request =
		AvatarRequest { seed: params.seed, format: AvatarFormat::parse(&params.format) };

	match state.service.avatar(request)? {
		AvatarResult::Svg(svg) => Ok((
			[
				(header::CONTENT_TYPE, "image/svg+xml"),
				(header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
			],
			svg,
		)
			.into_response()),
		AvatarResult::Json(value) => Ok(Json(value).into_response()),
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PersonaAvatarParams {
	seed: String,
	gender: Option<String>,
	size: Option<u32>,
}

async fn persona_avatar(
	State(state): State<AppState>,
	Query(params): Query<PersonaAvatarParams>,
) -> Result<Json<Value>, ApiError> {
	let response = state
		.service
		.persona_avatar(PersonaAvatarRequest {
			seed: params.seed,
			gender: params.gender,
			size: params.size,
		})
		.await?;
	Ok(Json(response))
}

async fn persona_name(
	State(state): State<AppState>,
	Query(params): Query<PersonaNameRequest>,
) -> Result<Json<Value>, ApiError> {
	let response = state.service.persona_name(params).await?;
	Ok(Json(response))
}

async fn persona_name_post(
	State(state): State<AppState>,
	Json(payload): Json<PersonaNameRequest>,
) -> Result<Json<Value>, ApiError> {
	let response = state.service.persona_name(payload).await?;
	Ok(Json(response))
}

async fn import_students(
	State(state): State<AppState>,
	body: String,
) -> Result<Json<ImportResponse>, ApiError> {
	let response = state.service.import_students(ImportRequest { body }).await?;
	Ok(Json(response))
}

async fn update_api_key(
	State(state): State<AppState>,
	Json(payload): Json<UpdateApiKeyRequest>,
) -> Result<Json<UpdateApiKeyResponse>, ApiError> {
	let response = state.service.update_enrichment_key(payload)?;
	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	details: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error: String,
	details: Option<String>,
}

impl ApiError {
	fn new(status: StatusCode, error: impl Into<String>, details: Option<String>) -> Self {
		Self { status, error: error.into(), details }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } => {
				Self::new(StatusCode::BAD_REQUEST, message, None)
			},
			ServiceError::NotFound { message } => Self::new(StatusCode::NOT_FOUND, message, None),
			ServiceError::Storage { message } => Self::new(
				StatusCode::INTERNAL_SERVER_ERROR,
				"Failed to query the record store.",
				Some(message),
			),
			ServiceError::Upstream { status, message } => Self::new(
				StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
				message,
				None,
			),
			ServiceError::Downstream { message } => Self::new(
				StatusCode::BAD_GATEWAY,
				"Enrichment service is unavailable.",
				Some(message),
			),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error: self.error, details: self.details };

		(self.status, Json(body)).into_response()
	}
}
