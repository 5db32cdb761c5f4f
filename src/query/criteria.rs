//! Filter vocabulary and the ordered criteria map handed to the facilitator.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Every predicate the engine knows how to apply.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterKind {
    TitleKeyword,
    ExactTitle,
    Director,
    Actor,
    Genre,
    Year,
    YearRange,
    MinRating,
    MaxRating,
    CommentKeyword,
    MinInappRating,
}

impl FilterKind {
    pub const ALL: [FilterKind; 11] = [
        FilterKind::TitleKeyword,
        FilterKind::ExactTitle,
        FilterKind::Director,
        FilterKind::Actor,
        FilterKind::Genre,
        FilterKind::Year,
        FilterKind::YearRange,
        FilterKind::MinRating,
        FilterKind::MaxRating,
        FilterKind::CommentKeyword,
        FilterKind::MinInappRating,
    ];

    pub fn to_token(&self) -> &'static str {
        match self {
            FilterKind::TitleKeyword => "TITLE_KEYWORD",
            FilterKind::ExactTitle => "EXACT_TITLE",
            FilterKind::Director => "DIRECTOR",
            FilterKind::Actor => "ACTOR",
            FilterKind::Genre => "GENRE",
            FilterKind::Year => "YEAR",
            FilterKind::YearRange => "YEAR_RANGE",
            FilterKind::MinRating => "MIN_RATING",
            FilterKind::MaxRating => "MAX_RATING",
            FilterKind::CommentKeyword => "COMMENT_KEYWORD",
            FilterKind::MinInappRating => "MIN_INAPP_RATING",
        }
    }

    /// Resolve an external token. Unknown tokens are an integration defect on
    /// the caller side, so they surface as an error rather than `None`.
    pub fn from_token(token: &str) -> Result<Self, QueryError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_token() == token)
            .ok_or_else(|| QueryError::UnknownFilterKind(token.to_string()))
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_token())
    }
}

/// Value attached to a criterion. Which shape is expected depends on the
/// [`FilterKind`] it is paired with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CriterionValue {
    Text(String),
    Integer(i32),
    Decimal(f64),
    Integers(Vec<i32>),
}

impl CriterionValue {
    pub fn shape(&self) -> &'static str {
        match self {
            CriterionValue::Text(_) => "text",
            CriterionValue::Integer(_) => "integer",
            CriterionValue::Decimal(_) => "decimal",
            CriterionValue::Integers(_) => "integer list",
        }
    }
}

impl From<&str> for CriterionValue {
    fn from(value: &str) -> Self {
        CriterionValue::Text(value.to_string())
    }
}

impl From<String> for CriterionValue {
    fn from(value: String) -> Self {
        CriterionValue::Text(value)
    }
}

impl From<i32> for CriterionValue {
    fn from(value: i32) -> Self {
        CriterionValue::Integer(value)
    }
}

impl From<f64> for CriterionValue {
    fn from(value: f64) -> Self {
        CriterionValue::Decimal(value)
    }
}

impl From<Vec<i32>> for CriterionValue {
    fn from(value: Vec<i32>) -> Self {
        CriterionValue::Integers(value)
    }
}

impl<const N: usize> From<[i32; N]> for CriterionValue {
    fn from(value: [i32; N]) -> Self {
        CriterionValue::Integers(value.to_vec())
    }
}

/// Errors raised while composing a query.
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("Unknown filter kind: {0}")]
    UnknownFilterKind(String),

    #[error("Filter {kind} expects a {expected} value, got a {actual} value")]
    MismatchedValue {
        kind: FilterKind,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Insertion-ordered map from [`FilterKind`] to its value.
///
/// Inserting a kind that is already present replaces its value in place, so
/// iteration order is the order in which kinds were first inserted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Criteria {
    entries: Vec<(FilterKind, CriterionValue)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: FilterKind, value: impl Into<CriterionValue>) -> Self {
        self.insert(kind, value);
        self
    }

    pub fn insert(&mut self, kind: FilterKind, value: impl Into<CriterionValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((kind, value)),
        }
    }

    pub fn get(&self, kind: FilterKind) -> Option<&CriterionValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKind, &CriterionValue)> {
        self.entries.iter().map(|(kind, value)| (*kind, value))
    }
}

impl FromIterator<(FilterKind, CriterionValue)> for Criteria {
    fn from_iter<T: IntoIterator<Item = (FilterKind, CriterionValue)>>(iter: T) -> Self {
        let mut criteria = Criteria::new();
        for (kind, value) in iter {
            criteria.insert(kind, value);
        }
        criteria
    }
}
