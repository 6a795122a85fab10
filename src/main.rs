//! bluegreen: blue-green deployment demo server.
//!
//! This is the application entry point. It reads configuration from the
//! environment, initializes tracing, sets up the Axum router and starts the
//! HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bluegreen::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use bluegreen::templates::init_templates;
use bluegreen::{create_router, http, AppState};

/// Serves a page colored by the VERSION environment variable and a /health endpoint.
///
/// PORT and VERSION are read from the environment only.
#[derive(Parser, Debug)]
#[command(name = "bluegreen", version, about)]
struct Args {
    /// Log level filter (e.g., "bluegreen=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format, overrides LOG_FORMAT
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing first with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    let (log_format, log_format_error) =
        match LogFormat::resolve(args.log_format, |key| std::env::var(key).ok()) {
            Ok(format) => (format, None),
            Err(e) => (LogFormat::default(), Some(e)),
        };
    init_tracing(&log_filter, log_format);

    if let Some(e) = log_format_error {
        tracing::warn!(error = %e, "Falling back to text log format");
    }

    // Read once; immutable for the rest of the process
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        version = %config.version,
        "Loaded configuration"
    );

    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    let state = AppState::new(config.clone(), tera);
    let app = create_router(state);

    if let Err(e) = http::start_server(app, &config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
