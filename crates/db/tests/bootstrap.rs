use sqlx::SqlitePool;

/// Full bootstrap test: migrate, verify schema, probe connectivity.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: SqlitePool) {
    // Health check
    folio_db::health_check(&pool).await.unwrap();

    // Verify all nine tables exist and start empty
    let tables = [
        "cv_infos",
        "projects",
        "work_experiences",
        "skills",
        "educations",
        "document_requests",
        "request_topics",
        "topic_fields",
        "form_responses",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Cascade and restrict behavior depend on foreign key enforcement.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_keys_enforced(pool: SqlitePool) {
    let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(enabled, 1, "foreign_keys pragma should be on");
}
