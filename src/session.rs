//! Catalog session: the full catalog plus the current result set.

use crate::catalog::{Movie, MovieId};
use crate::query::{facilitator, sort_by_kind, Criteria, QueryError, SortKind};
use crate::source::{CatalogSource, SourceError};
use std::sync::Arc;
use tracing::{debug, info};

pub struct CatalogSession {
    source: Arc<dyn CatalogSource>,
    all_records: Vec<Movie>,
    current_result: Vec<Movie>,
    has_queried: bool,
    default_sort: SortKind,
}

impl CatalogSession {
    /// Creates an empty session. Nothing is fetched until [`Self::refresh`].
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        CatalogSession {
            source,
            all_records: Vec::new(),
            current_result: Vec::new(),
            has_queried: false,
            default_sort: SortKind::default(),
        }
    }

    /// Creates a session and populates it with one fetch from `source`.
    pub fn open(source: Arc<dyn CatalogSource>) -> Result<Self, SourceError> {
        let mut session = Self::new(source);
        session.refresh()?;
        Ok(session)
    }

    pub fn source(&self) -> Arc<dyn CatalogSource> {
        self.source.clone()
    }

    /// Replaces the full catalog with a fresh fetch. The current result is
    /// left as it was.
    pub fn refresh(&mut self) -> Result<usize, SourceError> {
        let movies = self.source.fetch()?;
        Ok(self.install_catalog(movies))
    }

    /// Replaces the full catalog with records fetched elsewhere, typically on
    /// a blocking thread while the session was not locked.
    pub fn install_catalog(&mut self, movies: Vec<Movie>) -> usize {
        info!(
            "Installed {} records from {}",
            movies.len(),
            self.source.describe()
        );
        self.all_records = movies;
        self.all_records.len()
    }

    /// Filters the full catalog and sorts the outcome with the default sort.
    /// Absent or empty criteria select every record.
    pub fn query(&mut self, criteria: Option<&Criteria>) -> Result<&[Movie], QueryError> {
        self.current_result = match criteria {
            Some(criteria) if !criteria.is_empty() => {
                facilitator::apply(&self.all_records, criteria)?
            }
            _ => self.all_records.clone(),
        };
        self.has_queried = true;
        debug!(
            "Query with {} criteria matched {} of {} records",
            criteria.map(Criteria::len).unwrap_or(0),
            self.current_result.len(),
            self.all_records.len()
        );
        self.sort(Some(self.default_sort));
        Ok(&self.current_result)
    }

    /// Reorders the current result. `None` leaves it untouched.
    pub fn sort(&mut self, kind: Option<SortKind>) -> &[Movie] {
        if let Some(kind) = kind {
            self.current_result = sort_by_kind(&self.current_result, kind);
        }
        &self.current_result
    }

    /// Only affects subsequent queries, the current result is not re-sorted.
    pub fn set_default_sort(&mut self, kind: SortKind) {
        debug!("Default sort set to {}", kind);
        self.default_sort = kind;
    }

    pub fn default_sort(&self) -> SortKind {
        self.default_sort
    }

    pub fn lookup_by_id(&self, id: MovieId) -> Option<&Movie> {
        self.all_records.iter().find(|m| m.id() == id)
    }

    /// Appends a comment to the record with `id`. Returns whether a record was
    /// found; unknown ids are otherwise ignored.
    pub fn add_comment(&mut self, id: MovieId, comment: &str) -> bool {
        self.update_record(id, |movie| movie.add_comment(comment))
    }

    /// Appends a community rating submission to the record with `id`.
    pub fn add_rating(&mut self, id: MovieId, rating: f64) -> bool {
        self.update_record(id, |movie| movie.add_community_rating(rating))
    }

    // The current result holds copies, both must see the update.
    fn update_record<F>(&mut self, id: MovieId, update: F) -> bool
    where
        F: Fn(&mut Movie),
    {
        let Some(movie) = self.all_records.iter_mut().find(|m| m.id() == id) else {
            debug!("No record with id {}, update ignored", id);
            return false;
        };
        update(movie);
        if let Some(movie) = self.current_result.iter_mut().find(|m| m.id() == id) {
            update(movie);
        }
        true
    }

    pub fn all_records(&self) -> &[Movie] {
        &self.all_records
    }

    pub fn current_result(&self) -> &[Movie] {
        &self.current_result
    }

    /// The current result once a query ran, the full catalog before that.
    pub fn result_or_catalog(&self) -> &[Movie] {
        if self.has_queried {
            &self.current_result
        } else {
            &self.all_records
        }
    }
}
