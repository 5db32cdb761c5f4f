//! Movie Feaster Library
//!
//! A movie catalog with composable filters, sorts, exports and an HTTP API.

pub mod catalog;
pub mod config;
pub mod export;
pub mod input;
pub mod query;
pub mod server;
pub mod session;
pub mod source;

// Re-export commonly used types for convenience
pub use catalog::{Genre, Movie, MovieDraft, MovieId};
pub use query::{Criteria, CriterionValue, FilterKind, SortKind};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
pub use session::CatalogSession;
