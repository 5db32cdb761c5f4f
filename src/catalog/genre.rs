use serde::{Deserialize, Serialize};
use std::fmt;

/// Genre tag, mirroring the upstream movie database classification.
///
/// Every variant carries the numeric id used by the upstream API, so records
/// fetched from it can be mapped back and forth without a lookup table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    History,
    Horror,
    Music,
    Mystery,
    Romance,
    ScienceFiction,
    TvMovie,
    Thriller,
    War,
    Western,
}

impl Genre {
    pub const ALL: [Genre; 19] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Family,
        Genre::Fantasy,
        Genre::History,
        Genre::Horror,
        Genre::Music,
        Genre::Mystery,
        Genre::Romance,
        Genre::ScienceFiction,
        Genre::TvMovie,
        Genre::Thriller,
        Genre::War,
        Genre::Western,
    ];

    /// Upstream numeric id of the genre
    pub fn id(&self) -> u32 {
        match self {
            Genre::Action => 28,
            Genre::Adventure => 12,
            Genre::Animation => 16,
            Genre::Comedy => 35,
            Genre::Crime => 80,
            Genre::Documentary => 99,
            Genre::Drama => 18,
            Genre::Family => 10751,
            Genre::Fantasy => 14,
            Genre::History => 36,
            Genre::Horror => 27,
            Genre::Music => 10402,
            Genre::Mystery => 9648,
            Genre::Romance => 10749,
            Genre::ScienceFiction => 878,
            Genre::TvMovie => 10770,
            Genre::Thriller => 53,
            Genre::War => 10752,
            Genre::Western => 37,
        }
    }

    /// Canonical upper-case name, e.g. `SCIENCE_FICTION`
    pub fn name(&self) -> &'static str {
        match self {
            Genre::Action => "ACTION",
            Genre::Adventure => "ADVENTURE",
            Genre::Animation => "ANIMATION",
            Genre::Comedy => "COMEDY",
            Genre::Crime => "CRIME",
            Genre::Documentary => "DOCUMENTARY",
            Genre::Drama => "DRAMA",
            Genre::Family => "FAMILY",
            Genre::Fantasy => "FANTASY",
            Genre::History => "HISTORY",
            Genre::Horror => "HORROR",
            Genre::Music => "MUSIC",
            Genre::Mystery => "MYSTERY",
            Genre::Romance => "ROMANCE",
            Genre::ScienceFiction => "SCIENCE_FICTION",
            Genre::TvMovie => "TV_MOVIE",
            Genre::Thriller => "THRILLER",
            Genre::War => "WAR",
            Genre::Western => "WESTERN",
        }
    }

    /// Look up a genre by its upstream id.
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|genre| genre.id() == id)
    }

    /// Look up a genre by its exact canonical name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|genre| genre.name() == name)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
