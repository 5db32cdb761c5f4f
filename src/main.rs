use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::sync::{Arc, Mutex};
use std::{fmt::Debug, path::PathBuf};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movie_feaster::config::{self, CatalogSourceKind, DEFAULT_MAX_CATALOG_SIZE};
use movie_feaster::server::{run_server, RequestsLoggingLevel, ServerConfig};
use movie_feaster::session::CatalogSession;
use movie_feaster::source::DEFAULT_TMDB_BASE_URL;

const TMDB_API_TOKEN_ENV: &str = "TMDB_API_TOKEN";

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(format!("Error resolving path '{}': {}", s, msg));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = config::DEFAULT_PORT)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Origin allowed to call the API from a browser.
    #[clap(long)]
    pub cors_origin: Option<String>,

    /// Sort applied after every search, e.g. `year_desc`.
    #[clap(long)]
    pub default_sort: Option<String>,

    /// Where the catalog is loaded from.
    #[clap(long, value_enum, default_value_t = CatalogSourceKind::Tmdb)]
    pub catalog_source: CatalogSourceKind,

    /// JSON catalog file, required by the `json` catalog source.
    #[clap(long, value_parser = parse_path)]
    pub catalog_json: Option<PathBuf>,

    /// Base URL of the TMDB API.
    #[clap(long, default_value = DEFAULT_TMDB_BASE_URL)]
    pub tmdb_base_url: String,

    /// Maximum number of movies fetched from TMDB.
    #[clap(long, default_value_t = DEFAULT_MAX_CATALOG_SIZE)]
    pub max_catalog_size: usize,

    /// Latest year accepted in searches. Defaults to the current year.
    #[clap(long)]
    pub max_year: Option<i32>,

    /// Highest community rating a user can submit.
    #[clap(long, default_value_t = config::DEFAULT_MAX_COMMUNITY_RATING)]
    pub max_community_rating: f64,
}

impl CliArgs {
    fn to_cli_config(&self, tmdb_api_token: Option<String>) -> config::CliConfig {
        config::CliConfig {
            port: self.port,
            logging_level: self.logging_level.clone(),
            frontend_dir_path: self.frontend_dir_path.clone(),
            cors_origin: self.cors_origin.clone(),
            default_sort: self.default_sort.clone(),
            catalog_source: self.catalog_source,
            catalog_json: self.catalog_json.clone(),
            tmdb_api_token,
            tmdb_base_url: self.tmdb_base_url.clone(),
            max_catalog_size: self.max_catalog_size,
            max_year: self.max_year,
            max_community_rating: self.max_community_rating,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    // A missing .env file is fine, the environment may already be set up.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .map_err(|err| anyhow!("Could not initialize logging: {}", err))?;

    // Load TOML config if provided
    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            Some(config::FileConfig::load(path)?)
        }
        None => None,
    };

    // Resolve final configuration (TOML overrides CLI)
    let tmdb_api_token = std::env::var(TMDB_API_TOKEN_ENV).ok();
    let cli_config = cli_args.to_cli_config(tmdb_api_token);
    let app_config = config::AppConfig::resolve(&cli_config, file_config)?;

    info!("Configuration loaded:");
    info!("  port: {}", app_config.port);
    info!("  default_sort: {}", app_config.default_sort);
    info!("  max_year: {}", app_config.input.max_year);
    info!(
        "  max_community_rating: {}",
        app_config.input.max_community_rating
    );

    let source = app_config.catalog_source();
    info!("Loading catalog from {}...", source.describe());
    let mut session = tokio::task::spawn_blocking(move || CatalogSession::open(source))
        .await
        .context("Catalog loading task failed")??;
    session.set_default_sort(app_config.default_sort);

    let server_config = ServerConfig {
        requests_logging_level: app_config.logging_level.clone(),
        port: app_config.port,
        frontend_dir_path: app_config.frontend_dir_path.clone(),
        cors_origin: app_config.cors_origin.clone(),
    };

    info!("Ready to serve at port {}!", app_config.port);
    run_server(
        server_config,
        Arc::new(Mutex::new(session)),
        app_config.input_processor(),
    )
    .await
}
