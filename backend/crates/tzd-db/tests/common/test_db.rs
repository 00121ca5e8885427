use tzd_db::UserRepository;

/// Creates a repository over a fresh in-memory database with migrations run
pub async fn create_test_repository() -> UserRepository {
    UserRepository::open_in_memory()
        .await
        .expect("Failed to create test database")
}

/// Creates a repository over a WAL database file inside `dir`, with the
/// production multi-connection pool
pub async fn create_file_repository(dir: &tempfile::TempDir) -> UserRepository {
    UserRepository::open(dir.path().join("directory.db"))
        .await
        .expect("Failed to open file database")
}
