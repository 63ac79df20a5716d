mod config;
mod convert;
mod errors;
mod generation;
mod llm_client;
mod models;
mod record;
mod render;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::{Config, StorageConfig};
use crate::convert::CommandConverter;
use crate::llm_client::LlmClient;
use crate::models::profile::Profile;
use crate::render::RESUME_PAGE;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::local::LocalSubmissionStore;
use crate::storage::s3::S3SubmissionStore;
use crate::storage::SubmissionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cvforge API v{}", env!("CARGO_PKG_VERSION"));

    // Operator-supplied contact block and education list
    let profile = Profile::load(&config.profile_path)?;

    // Initialize submission storage
    let store = build_store(&config.storage).await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize PDF converter
    let converter = CommandConverter::new(config.pdf_converter_bin.clone(), RESUME_PAGE);
    info!(
        "PDF converter: {} ({} page)",
        config.pdf_converter_bin, RESUME_PAGE.paper
    );

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        store,
        converter: Arc::new(converter),
        profile: Arc::new(profile),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_store(storage: &StorageConfig) -> Result<Arc<dyn SubmissionStore>> {
    match storage {
        StorageConfig::Local { dir } => {
            Ok(Arc::new(LocalSubmissionStore::open(dir.clone()).await?))
        }
        StorageConfig::S3 {
            bucket,
            endpoint,
            prefix,
            aws_access_key_id,
            aws_secret_access_key,
        } => {
            let client = build_s3_client(endpoint, aws_access_key_id, aws_secret_access_key).await;
            info!("S3 submission store at s3://{bucket}/{prefix}");
            Ok(Arc::new(S3SubmissionStore::new(
                client,
                bucket.clone(),
                prefix.clone(),
            )))
        }
    }
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(
    endpoint: &str,
    access_key_id: &str,
    secret_access_key: &str,
) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        access_key_id,
        secret_access_key,
        None,
        None,
        "cvforge-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(endpoint)
        .load()
        .await;

    // Path-style addressing so MinIO endpoints work.
    let s3_config = aws_sdk_s3::config::Builder::from(&s3_config)
        .force_path_style(true)
        .build();

    aws_sdk_s3::Client::from_conf(s3_config)
}
