//! Configuration module
//!
//! Environment-driven configuration for the overlay service. Every value has
//! a default so the service starts with no environment at all, except that
//! production requires explicit CORS origins.

use std::env;

const SERVER_PORT: u16 = 8080;
const FETCH_TIMEOUT_SECS: u64 = 30;
const MAX_BODY_BYTES: usize = 64 * 1024;
const DEFAULT_POSITION: &str = "bottom-right";
const DEFAULT_SIZE: &str = "medium";
const DEFAULT_OPACITY: f32 = 0.9;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    /// Timeout for each remote image fetch. On timeout the whole request fails.
    pub fetch_timeout_seconds: u64,
    /// Limit on the incoming JSON request body.
    pub max_body_bytes: usize,
    /// Fallback position when the request omits one. Unrecognized values here
    /// behave exactly like unrecognized request values (bottom-right).
    pub default_position: String,
    /// Fallback size class when the request omits one.
    pub default_size: String,
    /// Fallback opacity when the request omits one.
    pub default_opacity: f32,
}

impl Config {
    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            fetch_timeout_seconds: env::var("FETCH_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| FETCH_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(FETCH_TIMEOUT_SECS),
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| MAX_BODY_BYTES.to_string())
                .parse()
                .unwrap_or(MAX_BODY_BYTES),
            default_position: env::var("DEFAULT_POSITION")
                .unwrap_or_else(|_| DEFAULT_POSITION.to_string())
                .trim()
                .to_lowercase(),
            default_size: env::var("DEFAULT_SIZE")
                .unwrap_or_else(|_| DEFAULT_SIZE.to_string())
                .trim()
                .to_lowercase(),
            default_opacity: env::var("DEFAULT_OPACITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_OPACITY),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.fetch_timeout_seconds == 0 {
            return Err(anyhow::anyhow!(
                "FETCH_TIMEOUT_SECONDS must be greater than zero"
            ));
        }

        if !(0.0..=1.0).contains(&self.default_opacity) {
            return Err(anyhow::anyhow!(
                "DEFAULT_OPACITY must be between 0.0 and 1.0"
            ));
        }

        Ok(())
    }
}
