//! Rendering of movie lists into downloadable documents.

mod csv;
mod pretty;
mod xml;

use crate::catalog::Movie;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Text formatting failed: {0}")]
    Format(#[from] fmt::Error),

    #[error("XML serialization failed: {0}")]
    Xml(String),
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Xml,
    #[default]
    Pretty,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Json,
        ExportFormat::Csv,
        ExportFormat::Xml,
        ExportFormat::Pretty,
    ];

    pub fn to_token(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xml => "xml",
            ExportFormat::Pretty => "pretty",
        }
    }

    /// Case-insensitive token lookup.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.to_token().eq_ignore_ascii_case(token))
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xml => "application/xml",
            ExportFormat::Pretty => "text/plain",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "movies.json",
            ExportFormat::Csv => "movies.csv",
            ExportFormat::Xml => "movies.xml",
            ExportFormat::Pretty => "movies.txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_token())
    }
}

pub fn export(movies: &[Movie], format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(movies)?),
        ExportFormat::Csv => csv::write_csv(movies),
        ExportFormat::Xml => xml::write_xml(movies),
        ExportFormat::Pretty => pretty::write_pretty(movies),
    }
}
