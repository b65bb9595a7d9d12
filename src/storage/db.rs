use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;

use crate::config::{DatabaseConfig, DATABASE_HOST, DATABASE_PORT};

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Connection options for the catalog database. Only the credentials come
/// from configuration; host, port and TLS mode are fixed.
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(DATABASE_HOST)
        .port(DATABASE_PORT)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(PgSslMode::Disable)
}

/// Open the shared pool. Establishes a connection eagerly so that an
/// unreachable database fails startup instead of the first request.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(connect_options(config))
        .await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> DatabaseConfig {
        DatabaseConfig {
            user: "catalog".to_string(),
            password: "p@ss word".to_string(),
            name: "infographics".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 10,
        }
    }

    #[test]
    fn connect_options_use_fixed_host() {
        let options = connect_options(&sample_config());
        assert_eq!(options.get_host(), DATABASE_HOST);
        assert_eq!(options.get_port(), DATABASE_PORT);
        assert_eq!(options.get_username(), "catalog");
        assert_eq!(options.get_database(), Some("infographics"));
    }
}
