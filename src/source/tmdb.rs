//! The Movie Database (TMDB) catalog source.
//!
//! Pages through the most popular movies, then fetches the credits of each
//! one to fill in directors and cast.

use super::{CatalogSource, SourceError};
use crate::catalog::{Genre, Movie, MovieDraft, MovieId};
use chrono::{Datelike, NaiveDate};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Results per page of the discover endpoint.
pub const TMDB_PAGE_SIZE: usize = 20;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct DiscoverPage {
    #[serde(default)]
    results: Vec<MovieSummary>,
}

#[derive(Debug, Deserialize)]
struct MovieSummary {
    id: MovieId,
    title: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
    #[serde(default)]
    popularity: f64,
    #[serde(default)]
    genre_ids: Vec<u32>,
    poster_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Credits {
    #[serde(default)]
    cast: Vec<CastMember>,
    #[serde(default)]
    crew: Vec<CrewMember>,
}

#[derive(Debug, Deserialize)]
struct CastMember {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CrewMember {
    name: String,
    job: Option<String>,
}

/// Year of a `YYYY-MM-DD` date, `0` when missing or unparseable.
fn release_year(release_date: Option<&str>) -> i32 {
    release_date
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .map(|date| date.year())
        .unwrap_or(0)
}

fn to_draft(summary: MovieSummary, credits: Credits) -> MovieDraft {
    let directors = credits
        .crew
        .into_iter()
        .filter(|member| member.job.as_deref() == Some("Director"))
        .map(|member| member.name)
        .collect();
    let castings = credits.cast.into_iter().map(|member| member.name).collect();
    let genres = summary
        .genre_ids
        .iter()
        .filter_map(|id| Genre::from_id(*id))
        .collect();

    MovieDraft {
        id: summary.id,
        title: summary.title,
        directors: Some(directors),
        year: release_year(summary.release_date.as_deref()),
        rating: summary.popularity,
        genres: Some(genres),
        overview: summary.overview,
        castings: Some(castings),
        img_url: summary
            .poster_path
            .map(|path| format!("{}{}", TMDB_IMAGE_BASE_URL, path)),
        comments: None,
        community_ratings: None,
    }
}

pub struct TmdbCatalogSource {
    base_url: String,
    api_token: String,
    max_results: usize,
}

impl TmdbCatalogSource {
    pub fn new(base_url: &str, api_token: &str, max_results: usize) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
            max_results,
        }
    }

    fn discover_url(&self, page: usize) -> String {
        format!(
            "{}/discover/movie?include_adult=false&include_video=false&language=en-US&sort_by=popularity.desc&page={}",
            self.base_url, page
        )
    }

    fn credits_url(&self, id: MovieId) -> String {
        format!("{}/movie/{}/credits", self.base_url, id)
    }

    fn get<T: serde::de::DeserializeOwned>(&self, client: &Client, url: &str) -> Result<T, SourceError> {
        let response = client
            .get(url)
            .header("accept", "application/json")
            .bearer_auth(&self.api_token)
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }

    fn fetch_summaries(&self, client: &Client) -> Result<Vec<MovieSummary>, SourceError> {
        let pages = self.max_results.div_ceil(TMDB_PAGE_SIZE);
        let mut summaries = Vec::with_capacity(self.max_results);
        let mut fetched_pages = 0;

        for page in 1..=pages {
            match self.get::<DiscoverPage>(client, &self.discover_url(page)) {
                Ok(body) => {
                    fetched_pages += 1;
                    summaries.extend(body.results);
                }
                Err(err) => error!("Error fetching movies (page {}): {}", page, err),
            }
        }

        if pages > 0 && fetched_pages == 0 {
            return Err(SourceError::Unavailable(self.base_url.clone()));
        }
        summaries.truncate(self.max_results);
        Ok(summaries)
    }

    fn fetch_credits(&self, client: &Client, id: MovieId) -> Credits {
        match self.get::<Credits>(client, &self.credits_url(id)) {
            Ok(credits) => credits,
            Err(err) => {
                warn!("Failed to fetch credits for movie {}: {}", id, err);
                Credits::default()
            }
        }
    }
}

impl CatalogSource for TmdbCatalogSource {
    fn fetch(&self) -> Result<Vec<Movie>, SourceError> {
        // Must not be created or dropped on an async executor thread.
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        let summaries = self.fetch_summaries(&client)?;
        debug!("Fetched {} movie summaries", summaries.len());

        let movies: Vec<Movie> = summaries
            .into_iter()
            .map(|summary| {
                let credits = self.fetch_credits(&client, summary.id);
                Movie::new(to_draft(summary, credits))
            })
            .collect();

        info!("Fetched {} movies from {}", movies.len(), self.base_url);
        Ok(movies)
    }

    fn describe(&self) -> String {
        format!("TMDB at {}", self.base_url)
    }
}
