use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub frontend_dir_path: Option<String>,
    pub cors_origin: Option<String>,
    pub default_sort: Option<String>,

    // Feature configs
    pub catalog: Option<CatalogFileConfig>,
    pub input: Option<InputFileConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct CatalogFileConfig {
    /// Catalog source to use: "json", "tmdb"
    pub source: Option<String>,
    pub json_path: Option<String>,
    pub tmdb_base_url: Option<String>,
    pub max_size: Option<usize>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct InputFileConfig {
    pub max_year: Option<i32>,
    pub max_community_rating: Option<f64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
