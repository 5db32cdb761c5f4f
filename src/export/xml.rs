use super::ExportError;
use crate::catalog::Movie;
use serde::Serialize;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Serialize)]
#[serde(rename = "movies")]
struct MoviesDocument<'a> {
    movie: Vec<MovieElement<'a>>,
}

#[derive(Serialize)]
struct Names<'a> {
    name: Vec<&'a str>,
}

impl<'a> Names<'a> {
    fn new<I: IntoIterator<Item = &'a str>>(names: I) -> Self {
        Self {
            name: names.into_iter().collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MovieElement<'a> {
    id: u32,
    title: &'a str,
    directors: Names<'a>,
    year: i32,
    rating: f64,
    genres: Names<'a>,
    overview: &'a str,
    castings: Names<'a>,
    img_url: &'a str,
    comments: Names<'a>,
    community_rating: f64,
    community_ratings_count: usize,
}

impl<'a> From<&'a Movie> for MovieElement<'a> {
    fn from(movie: &'a Movie) -> Self {
        Self {
            id: movie.id(),
            title: movie.title(),
            directors: Names::new(movie.directors().iter().map(String::as_str)),
            year: movie.year(),
            rating: movie.rating(),
            genres: Names::new(movie.genres().iter().map(|g| g.name())),
            overview: movie.overview(),
            castings: Names::new(movie.castings().iter().map(String::as_str)),
            img_url: movie.img_url(),
            comments: Names::new(movie.comments().iter().map(String::as_str)),
            community_rating: movie.community_rating(),
            community_ratings_count: movie.community_ratings().len(),
        }
    }
}

/// `<movies>` document with one `<movie>` element per record. List fields
/// hold one `<name>` child per entry.
pub(super) fn write_xml(movies: &[Movie]) -> Result<String, ExportError> {
    let document = MoviesDocument {
        movie: movies.iter().map(MovieElement::from).collect(),
    };
    let body =
        quick_xml::se::to_string(&document).map_err(|err| ExportError::Xml(err.to_string()))?;
    Ok(format!("{}\n{}", DECLARATION, body))
}
