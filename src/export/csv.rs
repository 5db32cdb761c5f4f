use super::ExportError;
use crate::catalog::Movie;
use std::fmt::Write;

const HEADER: &str = "Title,Year,Rating,Directors,Genres,Castings,Comments,InAppRating";
const LIST_SEPARATOR: &str = "; ";

/// Quotes fields holding a comma, a quote, a line feed or a carriage return,
/// doubling quotes.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub(super) fn write_csv(movies: &[Movie]) -> Result<String, ExportError> {
    let mut out = String::new();
    writeln!(out, "{}", HEADER)?;

    for movie in movies {
        let genres: Vec<&str> = movie.genres().iter().map(|g| g.name()).collect();
        writeln!(
            out,
            "{},{},{:.1},{},{},{},{},{:.1}",
            escape_field(movie.title()),
            movie.year(),
            movie.rating(),
            escape_field(&movie.directors().join(LIST_SEPARATOR)),
            escape_field(&genres.join(LIST_SEPARATOR)),
            escape_field(&movie.castings().join(LIST_SEPARATOR)),
            escape_field(&movie.comments().join(LIST_SEPARATOR)),
            movie.community_rating(),
        )?;
    }

    Ok(out)
}
