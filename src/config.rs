use thiserror::Error;

/// The database host is fixed by the deployment (compose service name).
pub const DATABASE_HOST: &str = "db";
pub const DATABASE_PORT: u16 = 5432;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub uploads: UploadConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Shared directory that the static file layer exposes under `/uploads/`
    pub dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: "/app/uploads".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let user = required("POSTGRES_USER")?;
        let name = required("POSTGRES_DB")?;
        let password = lookup("POSTGRES_PASSWORD").unwrap_or_default();

        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?;
        let acquire_timeout_secs = parse_or(&lookup, "DATABASE_ACQUIRE_TIMEOUT", 10)?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| ServerConfig::default().bind_address);
        let upload_dir = lookup("UPLOAD_DIR").unwrap_or_else(|| UploadConfig::default().dir);

        let config = Config {
            database: DatabaseConfig {
                user,
                password,
                name,
                max_connections,
                acquire_timeout_secs,
            },
            server: ServerConfig { bind_address },
            uploads: UploadConfig { dir: upload_dir },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }

        if self.database.acquire_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "DATABASE_ACQUIRE_TIMEOUT must be greater than 0".to_string(),
            ));
        }

        if self.uploads.dir.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "UPLOAD_DIR cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::ValidationError(format!("{key} is not a valid number: {raw}"))),
        None => Ok(default),
    }
}
