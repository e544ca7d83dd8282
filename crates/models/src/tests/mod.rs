

/// Postgres-backed tests run only when a database is reachable by configuration.
pub(crate) fn db_tests_disabled() -> bool {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        println!("Skipping database tests (SKIP_DB_TESTS is set)");
        return true;
    }
    if std::env::var("DATABASE_URL").is_err() && crate::db::DatabaseConfig::from_file().is_err() {
        println!("Skipping database tests (no DATABASE_URL or config.toml)");
        return true;
    }
    false
}
