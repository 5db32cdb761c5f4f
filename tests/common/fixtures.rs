//! Test fixture creation for the catalog file

use super::constants::*;
use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The three-movie catalog every test server starts from.
pub fn test_catalog_json() -> serde_json::Value {
    json!([
        {
            "id": MATRIX_ID,
            "title": MATRIX_TITLE,
            "directors": ["Lana Wachowski", "Lilly Wachowski"],
            "year": 1999,
            "rating": 8.7,
            "genres": ["ACTION", "SCIENCE_FICTION"],
            "overview": "A hacker learns the world is a simulation.",
            "castings": ["Keanu Reeves", "Carrie-Anne Moss"],
            "imgUrl": "https://image.tmdb.org/t/p/w500/matrix.jpg"
        },
        {
            "id": INCEPTION_ID,
            "title": INCEPTION_TITLE,
            "directors": ["Christopher Nolan"],
            "year": 2010,
            "rating": 8.8,
            "genres": ["SCIENCE_FICTION"],
            "castings": ["Leonardo DiCaprio"],
            "comments": ["Dreams within dreams"]
        },
        {
            "id": BARBIE_ID,
            "title": BARBIE_TITLE,
            "directors": ["Greta Gerwig"],
            "year": 2023,
            "rating": 7.1,
            "genres": ["COMEDY", "FAMILY"],
            "castings": ["Margot Robbie", "Ryan Gosling"],
            "communityRatings": [4.0, 5.0]
        }
    ])
}

/// Writes `catalog` as the JSON catalog file inside `dir`.
pub fn write_catalog_file(dir: &Path, catalog: &serde_json::Value) -> Result<PathBuf> {
    let path = dir.join("catalog.json");
    fs::write(&path, serde_json::to_string_pretty(catalog)?)?;
    Ok(path)
}

/// Creates a temporary directory holding the test catalog.
/// Returns (temp_dir, catalog_path)
pub fn create_test_catalog() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = write_catalog_file(dir.path(), &test_catalog_json())?;
    Ok((dir, path))
}
