use apnaghar_media::MediaConfig;

use crate::auth::jwt::JwtConfig;

/// Default upload body cap: enough for twenty videos at the per-file limit.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024 * 21;

/// Default cap for every non-upload request body.
const DEFAULT_MAX_JSON_BYTES: usize = 100 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `120`, uploads can be slow).
    pub request_timeout_secs: u64,
    /// Maximum body size in bytes for the `/api/upload` routes.
    pub max_upload_bytes: usize,
    /// Maximum body size in bytes for every other route.
    pub max_json_bytes: usize,
    /// Postgres connection string.
    pub database_url: String,
    /// Connection pool size (default: `5`).
    pub db_max_connections: u32,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Upload storage provider settings.
    pub media: MediaConfig,
    /// Optional admin account created at startup.
    pub admin_bootstrap: Option<AdminBootstrap>,
}

/// Credentials for the admin account ensured at startup.
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `120`                      |
    /// | `MAX_UPLOAD_BYTES`     | `2202009600` (2100 MiB)    |
    /// | `MAX_JSON_BYTES`       | `102400` (100 KiB)         |
    /// | `DATABASE_URL`         | **required**               |
    /// | `DB_MAX_CONNECTIONS`   | `5`                        |
    /// | `ADMIN_EMAIL`          | --                         |
    /// | `ADMIN_PASSWORD`       | --                         |
    /// | `ADMIN_NAME`           | `Administrator`            |
    ///
    /// # Panics
    ///
    /// Panics on a missing `DATABASE_URL` or a malformed numeric value.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .map(|v| v.parse().expect("MAX_UPLOAD_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let max_json_bytes: usize = std::env::var("MAX_JSON_BYTES")
            .map(|v| v.parse().expect("MAX_JSON_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_MAX_JSON_BYTES);

        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .map(|v| v.parse().expect("DB_MAX_CONNECTIONS must be a valid u32"))
            .unwrap_or(apnaghar_db::DEFAULT_MAX_CONNECTIONS);

        let admin_bootstrap = match (
            std::env::var("ADMIN_EMAIL").ok().filter(|v| !v.is_empty()),
            std::env::var("ADMIN_PASSWORD").ok().filter(|v| !v.is_empty()),
        ) {
            (Some(email), Some(password)) => Some(AdminBootstrap {
                email,
                password,
                name: std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Administrator".into()),
            }),
            _ => None,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            max_json_bytes,
            database_url,
            db_max_connections,
            jwt: JwtConfig::from_env(),
            media: MediaConfig::from_env(),
            admin_bootstrap,
        }
    }
}
