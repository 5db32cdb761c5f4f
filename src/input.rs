//! Parsing and validation of raw user input into typed query values.

use crate::catalog::{Genre, MIN_YEAR_EXCLUSIVE};
use crate::query::SortKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: String, value: String },

    #[error("Year must be between {min} and {max}, got {year}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("Comment cannot be empty")]
    BlankComment,

    #[error("Rating must be between 0 and {max}, got {value}")]
    RatingOutOfRange { value: f64, max: f64 },
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Clone, Debug)]
pub struct InputProcessor {
    max_year: i32,
    max_community_rating: f64,
}

impl InputProcessor {
    pub fn new(max_year: i32, max_community_rating: f64) -> Self {
        Self {
            max_year,
            max_community_rating,
        }
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    pub fn max_community_rating(&self) -> f64 {
        self.max_community_rating
    }

    /// Trimmed text, `None` when absent or blank.
    pub fn optional_text(&self, raw: Option<&str>) -> Option<String> {
        non_blank(raw).map(str::to_string)
    }

    pub fn optional_year(&self, raw: Option<&str>) -> Result<Option<i32>, InputError> {
        self.optional_year_field(raw, "Year")
    }

    /// Like [`Self::optional_year`], naming `field` in the error messages.
    pub fn optional_year_field(
        &self,
        raw: Option<&str>,
        field: &str,
    ) -> Result<Option<i32>, InputError> {
        let Some(raw) = non_blank(raw) else {
            return Ok(None);
        };
        let year: i32 = raw.parse().map_err(|_| InputError::NotANumber {
            field: field.to_string(),
            value: raw.to_string(),
        })?;
        if !(MIN_YEAR_EXCLUSIVE..=self.max_year).contains(&year) {
            return Err(InputError::YearOutOfRange {
                year,
                min: MIN_YEAR_EXCLUSIVE,
                max: self.max_year,
            });
        }
        Ok(Some(year))
    }

    pub fn optional_decimal(
        &self,
        raw: Option<&str>,
        field: &str,
    ) -> Result<Option<f64>, InputError> {
        let Some(raw) = non_blank(raw) else {
            return Ok(None);
        };
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Some)
            .ok_or_else(|| InputError::NotANumber {
                field: field.to_string(),
                value: raw.to_string(),
            })
    }

    /// Exact genre name, e.g. `COMEDY`. Unknown names give `None`.
    pub fn optional_genre(&self, raw: Option<&str>) -> Option<Genre> {
        non_blank(raw).and_then(Genre::from_name)
    }

    pub fn optional_sort_kind(&self, raw: Option<&str>) -> Option<SortKind> {
        non_blank(raw).and_then(SortKind::from_token)
    }

    pub fn validate_comment<'a>(&self, text: &'a str) -> Result<&'a str, InputError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(InputError::BlankComment);
        }
        Ok(trimmed)
    }

    pub fn validate_community_rating(&self, value: f64) -> Result<f64, InputError> {
        if !(0.0..=self.max_community_rating).contains(&value) {
            return Err(InputError::RatingOutOfRange {
                value,
                max: self.max_community_rating,
            });
        }
        Ok(value)
    }
}
