//! Predicate library.
//!
//! Every predicate takes the slice to narrow plus one criterion value and
//! returns a new vector, leaving the input untouched. A blank or out of range
//! criterion value never means "no filter": it produces an empty result.

use crate::catalog::Movie;
use std::collections::HashSet;

/// Valid domain for critic and community rating bounds.
pub const RATING_BOUND_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

fn retain<F>(movies: &[Movie], predicate: F) -> Vec<Movie>
where
    F: Fn(&Movie) -> bool,
{
    movies.iter().filter(|m| predicate(m)).cloned().collect()
}

/// Lowercased keyword, or `None` when the keyword is blank.
fn normalized_keyword(keyword: &str) -> Option<String> {
    if keyword.trim().is_empty() {
        None
    } else {
        Some(keyword.to_lowercase())
    }
}

fn any_contains<'a, I>(values: I, needle: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .any(|value| value.to_lowercase().contains(needle))
}

pub fn by_title_keyword(movies: &[Movie], keyword: &str) -> Vec<Movie> {
    let Some(needle) = normalized_keyword(keyword) else {
        return Vec::new();
    };
    retain(movies, |m| m.title().to_lowercase().contains(&needle))
}

pub fn by_exact_title(movies: &[Movie], title: &str) -> Vec<Movie> {
    let Some(needle) = normalized_keyword(title) else {
        return Vec::new();
    };
    retain(movies, |m| m.title().to_lowercase() == needle)
}

pub fn by_director(movies: &[Movie], director: &str) -> Vec<Movie> {
    let Some(needle) = normalized_keyword(director) else {
        return Vec::new();
    };
    retain(movies, |m| {
        any_contains(m.directors().iter().map(String::as_str), &needle)
    })
}

pub fn by_actor(movies: &[Movie], actor: &str) -> Vec<Movie> {
    let Some(needle) = normalized_keyword(actor) else {
        return Vec::new();
    };
    retain(movies, |m| {
        any_contains(m.castings().iter().map(String::as_str), &needle)
    })
}

/// Matches movies having a genre whose canonical name contains `genre`,
/// ignoring case. `"fiction"` matches `SCIENCE_FICTION`.
pub fn by_genre(movies: &[Movie], genre: &str) -> Vec<Movie> {
    let Some(needle) = normalized_keyword(genre) else {
        return Vec::new();
    };
    retain(movies, |m| {
        any_contains(m.genres().iter().map(|g| g.name()), &needle)
    })
}

pub fn by_year(movies: &[Movie], year: i32) -> Vec<Movie> {
    if year < 0 {
        return Vec::new();
    }
    retain(movies, |m| m.year() == year)
}

/// Inclusive on both ends. Requires `0 <= start <= end`.
pub fn by_year_range(movies: &[Movie], start: i32, end: i32) -> Vec<Movie> {
    if start < 0 || end < 0 || start > end {
        return Vec::new();
    }
    retain(movies, |m| (start..=end).contains(&m.year()))
}

pub fn by_min_rating(movies: &[Movie], min_rating: f64) -> Vec<Movie> {
    if !RATING_BOUND_RANGE.contains(&min_rating) {
        return Vec::new();
    }
    retain(movies, |m| m.rating() >= min_rating)
}

pub fn by_max_rating(movies: &[Movie], max_rating: f64) -> Vec<Movie> {
    if !RATING_BOUND_RANGE.contains(&max_rating) {
        return Vec::new();
    }
    retain(movies, |m| m.rating() <= max_rating)
}

pub fn by_comment_keyword(movies: &[Movie], keyword: &str) -> Vec<Movie> {
    let Some(needle) = normalized_keyword(keyword) else {
        return Vec::new();
    };
    retain(movies, |m| {
        any_contains(m.comments().iter().map(String::as_str), &needle)
    })
}

/// Movies nobody rated yet have a community rating of `0.0`.
pub fn by_min_community_rating(movies: &[Movie], min_rating: f64) -> Vec<Movie> {
    if !RATING_BOUND_RANGE.contains(&min_rating) {
        return Vec::new();
    }
    retain(movies, |m| m.community_rating() >= min_rating)
}

/// Records of `left` that also appear in `right`, compared as whole records
/// rather than by id. Keeps the order of `left`.
pub fn combine_and(left: &[Movie], right: &[Movie]) -> Vec<Movie> {
    let right: HashSet<&Movie> = right.iter().collect();
    left.iter()
        .filter(|m| right.contains(m))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Genre, MovieDraft};

    fn make_movie(id: u32, title: &str, year: i32, rating: f64, genres: Vec<Genre>) -> Movie {
        Movie::new(MovieDraft {
            id,
            title: Some(title.to_string()),
            year,
            rating,
            genres: Some(genres),
            ..Default::default()
        })
    }

    fn make_catalog() -> Vec<Movie> {
        let mut matrix = make_movie(
            1,
            "The Matrix",
            1999,
            8.7,
            vec![Genre::Action, Genre::ScienceFiction],
        );
        matrix.set_directors(Some(vec![
            "Lana Wachowski".to_string(),
            "Lilly Wachowski".to_string(),
        ]));
        matrix.set_castings(Some(vec![
            "Keanu Reeves".to_string(),
            "Carrie-Anne Moss".to_string(),
        ]));

        let mut inception = make_movie(2, "Inception", 2010, 8.8, vec![Genre::ScienceFiction]);
        inception.set_directors(Some(vec!["Christopher Nolan".to_string()]));
        inception.set_castings(Some(vec!["Leonardo DiCaprio".to_string()]));
        inception.add_community_rating(4.0);

        let mut barbie = make_movie(3, "Barbie", 2023, 7.1, vec![Genre::Comedy, Genre::Family]);
        barbie.set_directors(Some(vec!["Greta Gerwig".to_string()]));
        barbie.set_castings(Some(vec!["Margot Robbie".to_string()]));
        barbie.add_comment("Very pink!");
        barbie.add_community_rating(5.0);

        vec![matrix, inception, barbie]
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title()).collect()
    }

    #[test]
    fn test_title_keyword_is_case_insensitive_substring() {
        let catalog = make_catalog();
        assert_eq!(titles(&by_title_keyword(&catalog, "matrix")), vec!["The Matrix"]);
        assert_eq!(titles(&by_title_keyword(&catalog, "The")), vec!["The Matrix"]);
        assert!(by_title_keyword(&catalog, "!").is_empty());
    }

    #[test]
    fn test_blank_text_criteria_match_nothing() {
        let catalog = make_catalog();
        assert!(by_title_keyword(&catalog, "").is_empty());
        assert!(by_exact_title(&catalog, "  ").is_empty());
        assert!(by_director(&catalog, "").is_empty());
        assert!(by_actor(&catalog, "\t").is_empty());
        assert!(by_genre(&catalog, "").is_empty());
        assert!(by_comment_keyword(&catalog, " ").is_empty());
    }

    #[test]
    fn test_exact_title_ignores_case_but_not_length() {
        let catalog = make_catalog();
        assert_eq!(titles(&by_exact_title(&catalog, "inception")), vec!["Inception"]);
        assert!(by_exact_title(&catalog, "Incep").is_empty());
    }

    #[test]
    fn test_director_and_actor_match_any_entry() {
        let catalog = make_catalog();
        assert_eq!(titles(&by_director(&catalog, "nolan")), vec!["Inception"]);
        assert_eq!(titles(&by_director(&catalog, "lilly")), vec!["The Matrix"]);
        assert_eq!(titles(&by_actor(&catalog, "Carrie")), vec!["The Matrix"]);
        assert!(by_actor(&catalog, "Tom Hanks").is_empty());
    }

    #[test]
    fn test_genre_matches_canonical_name_fragment() {
        let catalog = make_catalog();
        assert_eq!(titles(&by_genre(&catalog, "COMEDY")), vec!["Barbie"]);
        assert_eq!(
            titles(&by_genre(&catalog, "fiction")),
            vec!["The Matrix", "Inception"]
        );
        assert!(by_genre(&catalog, "NON_EXISTENT").is_empty());
    }

    #[test]
    fn test_year_filters() {
        let catalog = make_catalog();
        assert_eq!(titles(&by_year(&catalog, 1999)), vec!["The Matrix"]);
        assert!(by_year(&catalog, -1).is_empty());
        assert_eq!(
            titles(&by_year_range(&catalog, 2000, 2025)),
            vec!["Inception", "Barbie"]
        );
        assert_eq!(by_year_range(&catalog, 1999, 2023).len(), 3);
    }

    #[test]
    fn test_year_range_rejects_inverted_or_negative_bounds() {
        let catalog = make_catalog();
        assert!(by_year_range(&catalog, 2025, 2000).is_empty());
        assert!(by_year_range(&catalog, -5, 2000).is_empty());
        assert!(by_year_range(&catalog, 0, -1).is_empty());
    }

    #[test]
    fn test_rating_bounds_outside_domain_match_nothing() {
        let catalog = make_catalog();
        assert_eq!(by_min_rating(&catalog, 8.0).len(), 2);
        assert_eq!(titles(&by_max_rating(&catalog, 8.0)), vec!["Barbie"]);
        assert!(by_min_rating(&catalog, 11.0).is_empty());
        assert!(by_min_rating(&catalog, -0.5).is_empty());
        assert!(by_max_rating(&catalog, 10.5).is_empty());
        assert!(by_max_rating(&catalog, f64::NAN).is_empty());
        // edges of the domain are valid
        assert_eq!(by_min_rating(&catalog, 0.0).len(), 3);
        assert_eq!(by_max_rating(&catalog, 10.0).len(), 3);
    }

    #[test]
    fn test_comment_keyword() {
        let catalog = make_catalog();
        assert_eq!(titles(&by_comment_keyword(&catalog, "PINK")), vec!["Barbie"]);
        assert!(by_comment_keyword(&catalog, "awesome").is_empty());
    }

    #[test]
    fn test_min_community_rating_counts_unrated_as_zero() {
        let catalog = make_catalog();
        assert_eq!(
            titles(&by_min_community_rating(&catalog, 4.0)),
            vec!["Inception", "Barbie"]
        );
        assert_eq!(by_min_community_rating(&catalog, 0.0).len(), 3);
        assert!(by_min_community_rating(&catalog, 10.1).is_empty());
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert!(by_title_keyword(&[], "matrix").is_empty());
        assert!(by_year_range(&[], 1900, 2000).is_empty());
        assert!(combine_and(&[], &make_catalog()).is_empty());
        assert!(combine_and(&make_catalog(), &[]).is_empty());
    }

    #[test]
    fn test_combine_and_uses_full_record_equality() {
        let catalog = make_catalog();
        let science = by_genre(&catalog, "SCIENCE");
        let recent = by_year_range(&catalog, 2000, 2025);
        assert_eq!(titles(&combine_and(&science, &recent)), vec!["Inception"]);

        // same id, different content: not considered the same record
        let mut altered = catalog[1].clone();
        altered.add_comment("edited");
        assert!(combine_and(&catalog[1..2], &[altered]).is_empty());
    }

    #[test]
    fn test_predicates_do_not_mutate_input() {
        let catalog = make_catalog();
        let snapshot = catalog.clone();
        let _ = by_min_rating(&catalog, 8.0);
        assert_eq!(catalog, snapshot);
    }
}
