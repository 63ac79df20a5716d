use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Where prior submissions live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Local {
        dir: PathBuf,
    },
    S3 {
        bucket: String,
        endpoint: String,
        prefix: String,
        aws_access_key_id: String,
        aws_secret_access_key: String,
    },
}

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub profile_path: PathBuf,
    pub storage: StorageConfig,
    pub pdf_converter_bin: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            profile_path: env_or("PROFILE_PATH", "profile.json").into(),
            storage: storage_from_env()?,
            pdf_converter_bin: env_or("PDF_CONVERTER_BIN", "wkhtmltopdf"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn storage_from_env() -> Result<StorageConfig> {
    match env_or("STORAGE_BACKEND", "local").to_lowercase().as_str() {
        "local" => Ok(StorageConfig::Local {
            dir: env_or("LOCAL_STORAGE_DIR", "submissions").into(),
        }),
        "s3" => Ok(StorageConfig::S3 {
            bucket: require_env("S3_BUCKET")?,
            endpoint: require_env("S3_ENDPOINT")?,
            prefix: env_or("S3_PREFIX", "submissions/"),
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
        }),
        other => bail!("STORAGE_BACKEND must be 'local' or 's3', got '{other}'"),
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
