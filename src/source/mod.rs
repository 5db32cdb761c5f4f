//! Catalog sources populate a session with movie records.

mod json_file;
mod tmdb;

pub use json_file::JsonFileCatalogSource;
pub use tmdb::{TmdbCatalogSource, DEFAULT_TMDB_BASE_URL, TMDB_IMAGE_BASE_URL, TMDB_PAGE_SIZE};

use crate::catalog::Movie;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Could not read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No catalog page could be fetched from {0}")]
    Unavailable(String),
}

/// Anything able to produce a full catalog in one go.
///
/// Implementations may block, callers running inside an async runtime are
/// expected to call [`CatalogSource::fetch`] from a blocking thread.
pub trait CatalogSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<Movie>, SourceError>;

    /// Human readable description, used in logs.
    fn describe(&self) -> String;
}

/// Fixed, in-memory list of records.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalogSource {
    movies: Vec<Movie>,
}

impl StaticCatalogSource {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn fetch(&self) -> Result<Vec<Movie>, SourceError> {
        Ok(self.movies.clone())
    }

    fn describe(&self) -> String {
        format!("static catalog ({} records)", self.movies.len())
    }
}
