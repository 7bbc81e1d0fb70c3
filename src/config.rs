use crate::error::StartupError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongo_uri: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, StartupError> {
        let mongo_uri = std::env::var("MONGO_URI")
            .map_err(|_| StartupError::Config("MONGO_URI is not set".into()))?;
        if mongo_uri.is_empty() {
            return Err(StartupError::Config("MONGO_URI is empty".into()));
        }
        Ok(Self { mongo_uri })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_requires_a_connection_string() {
        std::env::remove_var("MONGO_URI");
        assert!(matches!(
            AppConfig::from_env(),
            Err(StartupError::Config(_))
        ));

        std::env::set_var("MONGO_URI", "");
        assert!(matches!(
            AppConfig::from_env(),
            Err(StartupError::Config(_))
        ));

        std::env::set_var("MONGO_URI", "mongodb://localhost:27017");
        let config = AppConfig::from_env().expect("config should load");
        assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
    }
}
