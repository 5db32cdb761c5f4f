//! Sort library.
//!
//! Sorts never reorder in place: each returns a fresh vector. All sorts are
//! stable, ties keep the order they had in the input.

use crate::catalog::Movie;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKind {
    #[default]
    TitleAsc,
    TitleDesc,
    YearAsc,
    YearDesc,
    RatingAsc,
    RatingDesc,
    InappRatingAsc,
    InappRatingDesc,
}

impl SortKind {
    pub const ALL: [SortKind; 8] = [
        SortKind::TitleAsc,
        SortKind::TitleDesc,
        SortKind::YearAsc,
        SortKind::YearDesc,
        SortKind::RatingAsc,
        SortKind::RatingDesc,
        SortKind::InappRatingAsc,
        SortKind::InappRatingDesc,
    ];

    pub fn to_token(&self) -> &'static str {
        match self {
            SortKind::TitleAsc => "title_asc",
            SortKind::TitleDesc => "title_desc",
            SortKind::YearAsc => "year_asc",
            SortKind::YearDesc => "year_desc",
            SortKind::RatingAsc => "rating_asc",
            SortKind::RatingDesc => "rating_desc",
            SortKind::InappRatingAsc => "inapp_rating_asc",
            SortKind::InappRatingDesc => "inapp_rating_desc",
        }
    }

    /// Case-insensitive token lookup.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_token().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_token())
    }
}

fn sorted_by<F>(movies: &[Movie], compare: F) -> Vec<Movie>
where
    F: FnMut(&Movie, &Movie) -> Ordering,
{
    let mut sorted = movies.to_vec();
    sorted.sort_by(compare);
    sorted
}

// Each title is lowercased once.
fn sorted_by_title_key<K, F>(movies: &[Movie], key: F) -> Vec<Movie>
where
    K: Ord,
    F: FnMut(&Movie) -> K,
{
    let mut sorted = movies.to_vec();
    sorted.sort_by_cached_key(key);
    sorted
}

pub fn by_title_asc(movies: &[Movie]) -> Vec<Movie> {
    sorted_by_title_key(movies, |m| m.title().to_lowercase())
}

pub fn by_title_desc(movies: &[Movie]) -> Vec<Movie> {
    sorted_by_title_key(movies, |m| Reverse(m.title().to_lowercase()))
}

pub fn by_year_asc(movies: &[Movie]) -> Vec<Movie> {
    sorted_by(movies, |a, b| a.year().cmp(&b.year()))
}

pub fn by_year_desc(movies: &[Movie]) -> Vec<Movie> {
    sorted_by(movies, |a, b| b.year().cmp(&a.year()))
}

pub fn by_rating_asc(movies: &[Movie]) -> Vec<Movie> {
    sorted_by(movies, |a, b| a.rating().total_cmp(&b.rating()))
}

pub fn by_rating_desc(movies: &[Movie]) -> Vec<Movie> {
    sorted_by(movies, |a, b| b.rating().total_cmp(&a.rating()))
}

pub fn by_community_rating_asc(movies: &[Movie]) -> Vec<Movie> {
    sorted_by(movies, |a, b| {
        a.community_rating().total_cmp(&b.community_rating())
    })
}

pub fn by_community_rating_desc(movies: &[Movie]) -> Vec<Movie> {
    sorted_by(movies, |a, b| {
        b.community_rating().total_cmp(&a.community_rating())
    })
}

pub fn sort_by_kind(movies: &[Movie], kind: SortKind) -> Vec<Movie> {
    match kind {
        SortKind::TitleAsc => by_title_asc(movies),
        SortKind::TitleDesc => by_title_desc(movies),
        SortKind::YearAsc => by_year_asc(movies),
        SortKind::YearDesc => by_year_desc(movies),
        SortKind::RatingAsc => by_rating_asc(movies),
        SortKind::RatingDesc => by_rating_desc(movies),
        SortKind::InappRatingAsc => by_community_rating_asc(movies),
        SortKind::InappRatingDesc => by_community_rating_desc(movies),
    }
}

/// First `n` records of `movies`. Non-positive `n` gives an empty vector and
/// `n` past the end gives a full copy.
pub fn top_n(movies: &[Movie], n: i64) -> Vec<Movie> {
    if n <= 0 {
        return Vec::new();
    }
    let n = usize::try_from(n).unwrap_or(usize::MAX).min(movies.len());
    movies[..n].to_vec()
}
