use super::ExportError;
use crate::catalog::Movie;
use std::fmt::Write;

const SEPARATOR: &str = "-------------------";
const UNKNOWN: &str = "Unknown";

fn join_or_unknown<S: AsRef<str>>(values: &[S]) -> String {
    if values.is_empty() {
        return UNKNOWN.to_string();
    }
    values
        .iter()
        .map(|value| value.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_movie(out: &mut String, movie: &Movie) -> Result<(), ExportError> {
    let genres: Vec<&str> = movie.genres().iter().map(|g| g.name()).collect();

    writeln!(out, "Title: {}", movie.title())?;
    writeln!(out, "Year: {}", movie.year())?;
    writeln!(out, "Rating: {:?}", movie.rating())?;
    writeln!(out, "Directors: {}", join_or_unknown(movie.directors()))?;
    writeln!(out, "Genres: {}", join_or_unknown(&genres))?;
    writeln!(out, "Cast: {}", join_or_unknown(movie.castings()))?;

    if !movie.comments().is_empty() {
        writeln!(out, "Comments:")?;
        for comment in movie.comments() {
            writeln!(out, "  - {}", comment)?;
        }
    }
    if !movie.img_url().is_empty() {
        writeln!(out, "Poster: {}", movie.img_url())?;
    }

    writeln!(
        out,
        "App Rating: {:.1} (Total ratings: {})",
        movie.community_rating(),
        movie.community_ratings().len()
    )?;
    Ok(())
}

pub(super) fn write_pretty(movies: &[Movie]) -> Result<String, ExportError> {
    let mut out = String::new();
    for movie in movies {
        write_movie(&mut out, movie)?;
        writeln!(out, "{}", SEPARATOR)?;
    }
    Ok(out)
}
