use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    /// Prefix for the short URLs handed back to clients
    pub base_url: String,
    pub allocation: AllocationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub backend: DatabaseBackend,
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    Sqlite,
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// Candidate codes tried before giving up on a single shorten request
    pub max_attempts: u32,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            max_attempts: AllocationConfig::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl AllocationConfig {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let backend = match var("DATABASE_BACKEND", "sqlite").to_lowercase().as_str() {
            "sqlite" => DatabaseBackend::Sqlite,
            "postgres" | "postgresql" => DatabaseBackend::Postgres,
            "memory" => DatabaseBackend::Memory,
            other => {
                tracing::warn!(
                    "Unknown DATABASE_BACKEND '{other}', falling back to 'sqlite'. Supported values: sqlite, postgres, memory"
                );
                DatabaseBackend::Sqlite
            }
        };

        let database_url = var("DATABASE_URL", "sqlite://./snip.db");
        let max_connections = var("DATABASE_MAX_CONNECTIONS", "10")
            .parse::<u32>()
            .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?;

        let host = var("HOST", "0.0.0.0");
        let port = var("PORT", "5000")
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let base_url = var("BASE_URL", "http://localhost:5000");

        let max_attempts = var(
            "ALLOCATION_MAX_ATTEMPTS",
            &AllocationConfig::DEFAULT_MAX_ATTEMPTS.to_string(),
        )
        .parse::<u32>()
        .context("ALLOCATION_MAX_ATTEMPTS must be a positive integer")?;
        ensure!(max_attempts >= 1, "ALLOCATION_MAX_ATTEMPTS must be at least 1");

        Ok(Config {
            database: DatabaseConfig {
                backend,
                url: database_url,
                max_connections,
            },
            server: ServerConfig { host, port },
            base_url,
            allocation: AllocationConfig { max_attempts },
        })
    }
}
