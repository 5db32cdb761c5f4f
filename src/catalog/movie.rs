//! Movie catalog record.
//!
//! Records are built from a [`MovieDraft`], which applies the default
//! substitution rules for missing or invalid data. In-place updates after
//! construction go through setters with their own, narrower, validation.

use super::{Genre, RatingLedger};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;
use std::hash::{Hash, Hasher};

pub type MovieId = u32;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const NO_OVERVIEW: &str = "No Overview";

/// Years at or below this are considered unknown.
pub const MIN_YEAR_EXCLUSIVE: i32 = 1800;

/// Upper bound for a critic rating supplied at construction.
pub const MAX_INITIAL_RATING: f64 = 10_000.0;

/// Upper bound for a critic rating supplied through [`Movie::set_rating`].
pub const MAX_UPDATED_RATING: f64 = 10.0;

/// Raw movie data, as supplied by a catalog source.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MovieDraft {
    pub id: MovieId,
    pub title: Option<String>,
    pub directors: Option<Vec<String>>,
    pub year: i32,
    pub rating: f64,
    pub genres: Option<Vec<Genre>>,
    pub overview: Option<String>,
    pub castings: Option<Vec<String>>,
    pub img_url: Option<String>,
    pub comments: Option<Vec<String>>,
    pub community_ratings: Option<Vec<f64>>,
}

#[derive(Clone, Debug)]
pub struct Movie {
    id: MovieId,
    title: String,
    directors: Vec<String>,
    year: i32,
    rating: f64,
    genres: Vec<Genre>,
    overview: String,
    castings: Vec<String>,
    img_url: String,
    comments: Vec<String>,
    community_ratings: RatingLedger,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl Movie {
    pub fn new(draft: MovieDraft) -> Self {
        let year = if draft.year > MIN_YEAR_EXCLUSIVE {
            draft.year
        } else {
            0
        };
        let rating = if (0.0..=MAX_INITIAL_RATING).contains(&draft.rating) {
            draft.rating
        } else {
            0.0
        };

        Movie {
            id: draft.id,
            title: non_blank(draft.title).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            directors: draft.directors.unwrap_or_default(),
            year,
            rating,
            genres: draft.genres.unwrap_or_default(),
            overview: non_blank(draft.overview).unwrap_or_else(|| NO_OVERVIEW.to_string()),
            castings: draft.castings.unwrap_or_default(),
            img_url: draft.img_url.unwrap_or_default(),
            comments: draft.comments.unwrap_or_default(),
            community_ratings: RatingLedger::from_submissions(
                draft.community_ratings.unwrap_or_default(),
            ),
        }
    }

    pub fn id(&self) -> MovieId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn directors(&self) -> &[String] {
        &self.directors
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Critic rating, as reported by the catalog source.
    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn overview(&self) -> &str {
        &self.overview
    }

    pub fn castings(&self) -> &[String] {
        &self.castings
    }

    pub fn img_url(&self) -> &str {
        &self.img_url
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn community_ratings(&self) -> &RatingLedger {
        &self.community_ratings
    }

    /// Mean of the user submitted ratings, `0.0` when nobody rated yet.
    pub fn community_rating(&self) -> f64 {
        self.community_ratings.mean()
    }

    /// Blank titles are ignored.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if !title.trim().is_empty() {
            self.title = title;
        }
    }

    pub fn set_directors(&mut self, directors: Option<Vec<String>>) {
        self.directors = directors.unwrap_or_default();
    }

    /// Years at or below 1800 are ignored.
    pub fn set_year(&mut self, year: i32) {
        if year > MIN_YEAR_EXCLUSIVE {
            self.year = year;
        }
    }

    /// Ratings outside `0.0..=10.0` are ignored. Note this is narrower than the
    /// range accepted at construction.
    pub fn set_rating(&mut self, rating: f64) {
        if (0.0..=MAX_UPDATED_RATING).contains(&rating) {
            self.rating = rating;
        }
    }

    pub fn set_genres(&mut self, genres: Option<Vec<Genre>>) {
        self.genres = genres.unwrap_or_default();
    }

    /// Unvalidated, blank overviews are accepted.
    pub fn set_overview(&mut self, overview: impl Into<String>) {
        self.overview = overview.into();
    }

    pub fn set_castings(&mut self, castings: Option<Vec<String>>) {
        self.castings = castings.unwrap_or_default();
    }

    pub fn set_img_url(&mut self, img_url: Option<String>) {
        self.img_url = img_url.unwrap_or_default();
    }

    pub fn set_comments(&mut self, comments: Option<Vec<String>>) {
        self.comments = comments.unwrap_or_default();
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    pub fn set_community_ratings(&mut self, ratings: Option<Vec<f64>>) {
        self.community_ratings = RatingLedger::from_submissions(ratings.unwrap_or_default());
    }

    pub fn add_community_rating(&mut self, rating: f64) {
        self.community_ratings.push(rating);
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.directors == other.directors
            && self.year == other.year
            && self.rating.to_bits() == other.rating.to_bits()
            && self.genres == other.genres
            && self.overview == other.overview
            && self.castings == other.castings
            && self.img_url == other.img_url
            && self.comments == other.comments
            && self.community_ratings == other.community_ratings
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.title.hash(state);
        self.directors.hash(state);
        self.year.hash(state);
        self.rating.to_bits().hash(state);
        self.genres.hash(state);
        self.overview.hash(state);
        self.castings.hash(state);
        self.img_url.hash(state);
        self.comments.hash(state);
        self.community_ratings.hash(state);
    }
}

impl Serialize for Movie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Movie", 12)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("directors", &self.directors)?;
        state.serialize_field("year", &self.year)?;
        state.serialize_field("rating", &self.rating)?;
        state.serialize_field("genres", &self.genres)?;
        state.serialize_field("overview", &self.overview)?;
        state.serialize_field("castings", &self.castings)?;
        state.serialize_field("imgUrl", &self.img_url)?;
        state.serialize_field("comments", &self.comments)?;
        state.serialize_field("communityRating", &self.community_rating())?;
        state.serialize_field("communityRatingsCount", &self.community_ratings.len())?;
        state.end()
    }
}
