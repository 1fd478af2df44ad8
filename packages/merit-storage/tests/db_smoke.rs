use merit_config::Postgres;
use merit_domain::{
	page::PageWindow,
	query::{self, SortDirection, SortField},
};
use merit_storage::{db::Db, models::NewStudent, queries};
use merit_testkit::TestDatabase;

async fn test_db() -> Option<(TestDatabase, Db)> {
	let Some(base_dsn) = merit_testkit::env_dsn() else {
		eprintln!("Skipping storage tests; set MERIT_PG_DSN to run this test.");

		return None;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	Some((test_db, db))
}

async fn seed_admission(db: &Db, sr_no: i32, application_id: &str, full_name: &str) {
	sqlx::query(
		"INSERT INTO admission_records (sr_no, application_id, full_name, branch, college, category) \
		 VALUES ($1, $2, $3, 'Computer Engineering', 'Government College', 'OPEN')",
	)
	.bind(sr_no)
	.bind(application_id)
	.bind(full_name)
	.execute(&db.pool)
	.await
	.expect("Failed to seed admission row.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MERIT_PG_DSN to run."]
async fn record_tables_exist_after_bootstrap() {
	let Some((test_db, db)) = test_db().await else {
		return;
	};

	for table in ["admission_records", "student_records"] {
		let count: i64 = sqlx::query_scalar(
			"SELECT count(*) FROM information_schema.tables WHERE table_name = $1",
		)
		.bind(table)
		.fetch_one(&db.pool)
		.await
		.expect("Failed to query schema tables.");

		assert_eq!(count, 1, "missing table {table}");
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MERIT_PG_DSN to run."]
async fn search_filters_and_paginates() {
	let Some((test_db, db)) = test_db().await else {
		return;
	};

	seed_admission(&db, 1, "EN23156022", "ABHISHEK KUMAR").await;
	seed_admission(&db, 2, "EN23156023", "SONAL BALBUDHE").await;
	seed_admission(&db, 3, "EN23156024", "RUTVIK PATTEWAR").await;

	let filter = query::build_filter("Kumar Abhishek");
	let window = PageWindow::new(1, 10, 100);
	let total = queries::count_admissions(&db, filter.as_ref())
		.await
		.expect("Failed to count admissions.");
	let rows = queries::search_admissions(
		&db,
		filter.as_ref(),
		SortField::SrNo,
		SortDirection::Ascending,
		window,
	)
	.await
	.expect("Failed to search admissions.");

	assert_eq!(total, 1);
	assert_eq!(rows.len(), 1);
	assert_eq!(rows[0].full_name.as_deref(), Some("ABHISHEK KUMAR"));

	// Unfiltered search matches everything, beyond-range pages come back empty.
	let total = queries::count_admissions(&db, None).await.expect("Failed to count admissions.");
	let rows = queries::search_admissions(
		&db,
		None,
		SortField::SrNo,
		SortDirection::Ascending,
		PageWindow::new(999, 10, 100),
	)
	.await
	.expect("Failed to search admissions.");

	assert_eq!(total, 3);
	assert!(rows.is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MERIT_PG_DSN to run."]
async fn student_lookup_and_bulk_insert() {
	let Some((test_db, db)) = test_db().await else {
		return;
	};
	let rows = vec![
		NewStudent {
			application_id: Some("EN23156022".to_string()),
			name: "Abhishek".to_string(),
			surname: Some("Kumar".to_string()),
			email: Some("abhishek.kumar@example.com".to_string()),
			father_name: None,
			occupation: None,
			category: Some("OPEN".to_string()),
			religion: None,
			subcast: None,
			image_url: None,
			github_url: None,
			twitter_url: None,
			linkedin_url: None,
			instagram_url: None,
		},
		NewStudent {
			application_id: None,
			name: "Sonal".to_string(),
			surname: Some("Balbudhe".to_string()),
			email: None,
			father_name: None,
			occupation: None,
			category: None,
			religion: None,
			subcast: None,
			image_url: None,
			github_url: None,
			twitter_url: None,
			linkedin_url: None,
			instagram_url: None,
		},
	];
	let inserted = queries::insert_students(&db, &rows).await.expect("Failed to insert students.");

	assert_eq!(inserted, 2);

	let found = queries::student_by_application_id(&db, "EN23156022")
		.await
		.expect("Failed to look up student.");

	assert_eq!(found.expect("student expected").name, "Abhishek");

	let missing = queries::student_by_application_id(&db, "EN00000000")
		.await
		.expect("Failed to look up student.");

	assert!(missing.is_none());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
