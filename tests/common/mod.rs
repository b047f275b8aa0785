use classhub::db::{DbPool, establish_connection_pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A fully migrated SQLite database in a temporary directory, removed
/// when the value is dropped.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create a temporary directory");
        let path = dir.path().join(name);
        let database_url = path.to_str().expect("Database path is not valid UTF-8");

        let pool =
            establish_connection_pool(database_url).expect("Failed to build a connection pool");

        let mut conn = pool.get().expect("Failed to get a connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
