use std::sync::Arc;

use mongodb::Collection;

use crate::config::AppConfig;
use crate::db;
use crate::error::StartupError;
use crate::signup::User;

#[derive(Clone)]
pub struct AppState {
    pub users: Collection<User>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> Result<Self, StartupError> {
        let config = Arc::new(AppConfig::from_env()?);
        let users = db::connect(&config.mongo_uri).await?;
        Ok(Self { users, config })
    }

    pub fn from_parts(users: Collection<User>, config: Arc<AppConfig>) -> Self {
        Self { users, config }
    }
}
