use axum::{
	body::{self, Body},
	http::{Request, StatusCode},
};
use tower::util::ServiceExt;

use merit_api::{routes, state::AppState};
use merit_config::{
	AvatarProviderConfig, Config, EnrichmentProviderConfig, Import, PersonaProviderConfig,
	Postgres, Providers, Search, Security, Service, Storage,
};
use merit_testkit::TestDatabase;

fn test_config(dsn: String) -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			admin_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		storage: Storage { postgres: Postgres { dsn, pool_max_conns: 1 } },
		providers: Providers {
			enrichment: EnrichmentProviderConfig {
				api_base: "http://127.0.0.1:1".to_string(),
				path: "/enrichment".to_string(),
				api_key: "sk_00000000000000000000".to_string(),
				timeout_ms: 1_000,
			},
			avatar: AvatarProviderConfig {
				api_base: "http://127.0.0.1:1".to_string(),
				path: "/api/generate/avatar".to_string(),
				timeout_ms: 1_000,
			},
			persona: PersonaProviderConfig {
				api_base: "http://127.0.0.1:1".to_string(),
				path: "/api/generate/name".to_string(),
				timeout_ms: 1_000,
			},
		},
		search: Search { default_page_size: 10, max_page_size: 100 },
		import: Import { batch_size: 100 },
		security: Security { bind_localhost_only: true },
	}
}

async fn test_state() -> Option<(TestDatabase, AppState)> {
	let Some(base_dsn) = merit_testkit::env_dsn() else {
		eprintln!("Skipping HTTP tests; set MERIT_PG_DSN to run this test.");

		return None;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let config = test_config(test_db.dsn().to_string());
	let state = AppState::new(config).await.expect("Failed to initialize app state.");

	Some((test_db, state))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
	let response = app
		.oneshot(Request::builder().uri(uri).body(Body::empty()).expect("Failed to build request."))
		.await
		.expect("Failed to call route.");
	let status = response.status();
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

	(status, json)
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MERIT_PG_DSN to run."]
async fn health_ok() {
	let Some((test_db, state)) = test_state().await else {
		return;
	};
	let app = routes::router(state.clone());
	let _ = routes::admin_router(state);
	let response = app
		.oneshot(
			Request::builder()
				.uri("/health")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call /health.");

	assert_eq!(response.status(), StatusCode::OK);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MERIT_PG_DSN to run."]
async fn search_returns_rows_and_metadata() {
	let Some((test_db, state)) = test_state().await else {
		return;
	};

	sqlx::query(
		"INSERT INTO admission_records (sr_no, application_id, full_name, branch, college, category) \
		 VALUES (1, 'EN23156022', 'ABHISHEK KUMAR', 'Computer Engineering', 'Government College', 'OPEN')",
	)
	.execute(&state.service.db.pool)
	.await
	.expect("Failed to seed admission row.");

	let app = routes::router(state.clone());
	let (status, json) =
		get(app, "/v1/admissions?search=Kumar&page=1&pageSize=10&sortBy=full_name&sortOrder=asc")
			.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["data"].as_array().map(Vec::len), Some(1));
	assert_eq!(json["data"][0]["full_name"], "ABHISHEK KUMAR");
	assert_eq!(json["metadata"]["total"], 1);
	assert_eq!(json["metadata"]["page"], 1);
	assert_eq!(json["metadata"]["pageSize"], 10);
	assert_eq!(json["metadata"]["totalPages"], 1);

	// Beyond-range page: empty data, accurate metadata, still 200.
	let app = routes::router(state);
	let (status, json) = get(app, "/v1/admissions?page=999").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["data"].as_array().map(Vec::len), Some(0));
	assert_eq!(json["metadata"]["total"], 1);
	assert_eq!(json["metadata"]["totalPages"], 1);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MERIT_PG_DSN to run."]
async fn detail_answers_404_for_unknown_records() {
	let Some((test_db, state)) = test_state().await else {
		return;
	};
	let app = routes::router(state);
	let (status, json) =
		get(app, "/v1/admissions/00000000-0000-0000-0000-000000000000").await;

	assert_eq!(status, StatusCode::NOT_FOUND);
	assert!(json["error"].is_string());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MERIT_PG_DSN to run."]
async fn avatar_requires_seed_and_repeats_per_seed() {
	let Some((test_db, state)) = test_state().await else {
		return;
	};
	let app = routes::router(state.clone());
	let (status, json) = get(app, "/v1/avatar").await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert!(json["error"].is_string());

	let mut bodies = Vec::new();

	for _ in 0..2 {
		let app = routes::router(state.clone());
		let response = app
			.oneshot(
				Request::builder()
					.uri("/v1/avatar?seed=EN23156022&format=svg")
					.body(Body::empty())
					.expect("Failed to build request."),
			)
			.await
			.expect("Failed to call avatar route.");

		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(
			response.headers().get("content-type").and_then(|v| v.to_str().ok()),
			Some("image/svg+xml")
		);

		let bytes = body::to_bytes(response.into_body(), usize::MAX)
			.await
			.expect("Failed to read response body.");

		bodies.push(bytes);
	}

	assert_eq!(bodies[0], bodies[1]);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MERIT_PG_DSN to run."]
async fn enrichment_degrades_to_fallback_when_unreachable() {
	let Some((test_db, state)) = test_state().await else {
		return;
	};

	// Provider endpoints in the test config point at a closed port, so every
	// auth scheme fails and the deterministic profile must come back.
	let app = routes::router(state.clone());
	let (status, first) = get(app, "/v1/enrichment?email=abhishek.kumar@example.com").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(first["fallback"], true);
	assert_eq!(first["person"]["firstName"], "Abhishek");

	let app = routes::router(state.clone());
	let (_, second) = get(app, "/v1/enrichment?email=abhishek.kumar@example.com").await;

	assert_eq!(first, second);

	// The direct lookup endpoint has no substitute and must not answer 200.
	let app = routes::router(state);
	let (status, _) = get(app, "/v1/lookup?email=abhishek.kumar@example.com").await;

	assert!(!status.is_success());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MERIT_PG_DSN to run."]
async fn admin_endpoint_updates_api_key() {
	let Some((test_db, state)) = test_state().await else {
		return;
	};
	let app = routes::admin_router(state.clone());
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/v1/admin/api_key")
				.header("content-type", "application/json")
				.body(Body::from(r#"{"api_key":"sk_11111111111111111111"}"#))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call admin route.");

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(state.service.enrichment_key(), "sk_11111111111111111111");

	let app = routes::admin_router(state);
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/v1/admin/api_key")
				.header("content-type", "application/json")
				.body(Body::from(r#"{"api_key":"bogus"}"#))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call admin route.");

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MERIT_PG_DSN to run."]
async fn csv_import_inserts_named_rows_only() {
	let Some((test_db, state)) = test_state().await else {
		return;
	};
	let app = routes::router(state.clone());
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/v1/students/import")
				.header("content-type", "text/csv")
				.body(Body::from("Abhishek,Kumar,abhishek.kumar@example.com\n,Missing\n"))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call import route.");

	assert_eq!(response.status(), StatusCode::OK);

	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json: serde_json::Value =
		serde_json::from_slice(&bytes).expect("Failed to parse response.");

	assert_eq!(json["imported"], 1);
	assert_eq!(json["skipped"], 1);

	let count: i64 = sqlx::query_scalar("SELECT count(*) FROM student_records")
		.fetch_one(&state.service.db.pool)
		.await
		.expect("Failed to count students.");

	assert_eq!(count, 1);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
