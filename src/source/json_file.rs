use super::{CatalogSource, SourceError};
use crate::catalog::{Movie, MovieDraft};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a JSON array of movie records from disk on every fetch.
#[derive(Clone, Debug)]
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalogSource {
    fn fetch(&self) -> Result<Vec<Movie>, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let drafts: Vec<MovieDraft> = serde_json::from_str(&content)?;
        debug!("Read {} drafts from {:?}", drafts.len(), self.path);
        Ok(drafts.into_iter().map(Movie::new).collect())
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}
