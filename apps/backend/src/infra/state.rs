use crate::config::db::DbConfig;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    db_config: Option<DbConfig>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, config: DbConfig) -> Self {
        self.db_config = Some(config);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_config {
            // single entrypoint: connect + migrate
            Some(config) => Ok(AppState::new(bootstrap_db(&config).await?)),
            None => Ok(AppState::without_db()),
        }
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
