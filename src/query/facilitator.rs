//! Folds an ordered [`Criteria`] map into a single filtered result.

use super::criteria::{CriterionValue, Criteria, FilterKind, QueryError};
use super::predicates;
use crate::catalog::Movie;
use tracing::debug;

fn expect_text(kind: FilterKind, value: &CriterionValue) -> Result<&str, QueryError> {
    match value {
        CriterionValue::Text(text) => Ok(text),
        other => Err(mismatch(kind, "text", other)),
    }
}

fn expect_integer(kind: FilterKind, value: &CriterionValue) -> Result<i32, QueryError> {
    match value {
        CriterionValue::Integer(n) => Ok(*n),
        other => Err(mismatch(kind, "integer", other)),
    }
}

/// Integers are promoted, so `{MIN_RATING: 8}` reads as `8.0`.
fn expect_decimal(kind: FilterKind, value: &CriterionValue) -> Result<f64, QueryError> {
    match value {
        CriterionValue::Decimal(x) => Ok(*x),
        CriterionValue::Integer(n) => Ok(f64::from(*n)),
        other => Err(mismatch(kind, "decimal", other)),
    }
}

fn expect_integers(kind: FilterKind, value: &CriterionValue) -> Result<&[i32], QueryError> {
    match value {
        CriterionValue::Integers(values) => Ok(values),
        other => Err(mismatch(kind, "integer list", other)),
    }
}

fn mismatch(kind: FilterKind, expected: &'static str, actual: &CriterionValue) -> QueryError {
    QueryError::MismatchedValue {
        kind,
        expected,
        actual: actual.shape(),
    }
}

fn apply_one(
    movies: Vec<Movie>,
    kind: FilterKind,
    value: &CriterionValue,
) -> Result<Vec<Movie>, QueryError> {
    let narrowed = match kind {
        FilterKind::TitleKeyword => predicates::by_title_keyword(&movies, expect_text(kind, value)?),
        FilterKind::ExactTitle => predicates::by_exact_title(&movies, expect_text(kind, value)?),
        FilterKind::Director => predicates::by_director(&movies, expect_text(kind, value)?),
        FilterKind::Actor => predicates::by_actor(&movies, expect_text(kind, value)?),
        FilterKind::Genre => predicates::by_genre(&movies, expect_text(kind, value)?),
        FilterKind::Year => predicates::by_year(&movies, expect_integer(kind, value)?),
        FilterKind::YearRange => match expect_integers(kind, value)? {
            [start, end] => predicates::by_year_range(&movies, *start, *end),
            range => {
                debug!(
                    "Skipping {} criterion with {} values, expected 2",
                    kind,
                    range.len()
                );
                movies
            }
        },
        FilterKind::MinRating => predicates::by_min_rating(&movies, expect_decimal(kind, value)?),
        FilterKind::MaxRating => predicates::by_max_rating(&movies, expect_decimal(kind, value)?),
        FilterKind::CommentKeyword => {
            predicates::by_comment_keyword(&movies, expect_text(kind, value)?)
        }
        FilterKind::MinInappRating => {
            predicates::by_min_community_rating(&movies, expect_decimal(kind, value)?)
        }
    };
    Ok(narrowed)
}

/// Applies every criterion in iteration order, each narrowing the output of
/// the previous one. Empty criteria return a copy of `movies`.
pub fn apply(movies: &[Movie], criteria: &Criteria) -> Result<Vec<Movie>, QueryError> {
    criteria
        .iter()
        .try_fold(movies.to_vec(), |working, (kind, value)| {
            let before = working.len();
            let narrowed = apply_one(working, kind, value)?;
            debug!("{} narrowed {} records to {}", kind, before, narrowed.len());
            Ok(narrowed)
        })
}
