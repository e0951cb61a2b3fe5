use sea_orm::DatabaseConnection;

/// Application state shared across workers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Connection pool; absent only in tests that exercise the no-db path
    db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    pub fn without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
