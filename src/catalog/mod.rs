mod genre;
mod movie;
mod ratings;

pub use genre::Genre;
pub use movie::{
    Movie, MovieDraft, MovieId, MAX_INITIAL_RATING, MAX_UPDATED_RATING, MIN_YEAR_EXCLUSIVE,
    NO_OVERVIEW, UNKNOWN_TITLE,
};
pub use ratings::RatingLedger;
