mod file_config;

pub use file_config::{CatalogFileConfig, FileConfig, InputFileConfig};

use crate::input::InputProcessor;
use crate::query::SortKind;
use crate::server::RequestsLoggingLevel;
use crate::source::{
    CatalogSource, JsonFileCatalogSource, TmdbCatalogSource, DEFAULT_TMDB_BASE_URL,
};
use anyhow::{bail, Result};
use chrono::Datelike;
use clap::ValueEnum;
use std::path::PathBuf;
use std::sync::Arc;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_MAX_CATALOG_SIZE: usize = 200;
pub const DEFAULT_MAX_COMMUNITY_RATING: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CatalogSourceKind {
    Json,
    #[default]
    Tmdb,
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub cors_origin: Option<String>,
    pub default_sort: Option<String>,
    pub catalog_source: CatalogSourceKind,
    pub catalog_json: Option<PathBuf>,
    pub tmdb_api_token: Option<String>,
    pub tmdb_base_url: String,
    pub max_catalog_size: usize,
    pub max_year: Option<i32>,
    pub max_community_rating: f64,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            port: DEFAULT_PORT,
            logging_level: RequestsLoggingLevel::default(),
            frontend_dir_path: None,
            cors_origin: None,
            default_sort: None,
            catalog_source: CatalogSourceKind::default(),
            catalog_json: None,
            tmdb_api_token: None,
            tmdb_base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            max_catalog_size: DEFAULT_MAX_CATALOG_SIZE,
            max_year: None,
            max_community_rating: DEFAULT_MAX_COMMUNITY_RATING,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Core settings
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub cors_origin: Option<String>,
    pub default_sort: SortKind,

    // Feature configs (with defaults)
    pub catalog: CatalogSettings,
    pub input: InputSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSettings {
    Json {
        path: PathBuf,
    },
    Tmdb {
        base_url: String,
        api_token: String,
        max_size: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputSettings {
    pub max_year: i32,
    pub max_community_rating: f64,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());
        let cors_origin = file.cors_origin.or_else(|| cli.cors_origin.clone());

        let default_sort = match file.default_sort.or_else(|| cli.default_sort.clone()) {
            Some(token) => match SortKind::from_token(&token) {
                Some(kind) => kind,
                None => bail!("Unknown default sort: {}", token),
            },
            None => SortKind::default(),
        };

        let catalog_file = file.catalog.unwrap_or_default();
        let source_kind = match catalog_file.source {
            Some(s) => match CatalogSourceKind::from_str(&s, true) {
                Ok(kind) => kind,
                Err(_) => bail!("Unknown catalog source: {}", s),
            },
            None => cli.catalog_source,
        };

        let catalog = match source_kind {
            CatalogSourceKind::Json => {
                let path = catalog_file
                    .json_path
                    .map(PathBuf::from)
                    .or_else(|| cli.catalog_json.clone())
                    .ok_or_else(|| {
                        anyhow::anyhow!(
                            "json_path must be specified via --catalog-json or in config file"
                        )
                    })?;
                if !path.is_file() {
                    bail!("Catalog file does not exist: {:?}", path);
                }
                CatalogSettings::Json { path }
            }
            CatalogSourceKind::Tmdb => {
                let api_token = match &cli.tmdb_api_token {
                    Some(token) if !token.trim().is_empty() => token.clone(),
                    _ => bail!("TMDB_API_TOKEN must be set to use the tmdb catalog source"),
                };
                let base_url = catalog_file
                    .tmdb_base_url
                    .unwrap_or_else(|| cli.tmdb_base_url.clone());
                let max_size = catalog_file.max_size.unwrap_or(cli.max_catalog_size);
                if max_size == 0 {
                    bail!("Maximum catalog size must be positive");
                }
                CatalogSettings::Tmdb {
                    base_url,
                    api_token,
                    max_size,
                }
            }
        };

        let input_file = file.input.unwrap_or_default();
        let max_year = input_file
            .max_year
            .or(cli.max_year)
            .unwrap_or_else(|| chrono::Local::now().year());
        let max_community_rating = input_file
            .max_community_rating
            .unwrap_or(cli.max_community_rating);
        if !(max_community_rating > 0.0 && max_community_rating <= 10.0) {
            bail!(
                "Maximum community rating must be in (0, 10], got {}",
                max_community_rating
            );
        }

        Ok(Self {
            port,
            logging_level,
            frontend_dir_path,
            cors_origin,
            default_sort,
            catalog,
            input: InputSettings {
                max_year,
                max_community_rating,
            },
        })
    }

    pub fn catalog_source(&self) -> Arc<dyn CatalogSource> {
        match &self.catalog {
            CatalogSettings::Json { path } => Arc::new(JsonFileCatalogSource::new(path)),
            CatalogSettings::Tmdb {
                base_url,
                api_token,
                max_size,
            } => Arc::new(TmdbCatalogSource::new(base_url, api_token, *max_size)),
        }
    }

    pub fn input_processor(&self) -> InputProcessor {
        InputProcessor::new(self.input.max_year, self.input.max_community_rating)
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
