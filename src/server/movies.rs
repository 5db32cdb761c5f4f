//! Movie API routes

use crate::catalog::{Genre, Movie, MovieId};
use crate::export::{export, ExportError, ExportFormat};
use crate::input::InputError;
use crate::query::{top_n, Criteria, FilterKind, QueryError, SortKind};
use crate::session::CatalogSession;
use crate::source::SourceError;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::MutexGuard;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::state::{GuardedInputProcessor, GuardedSession, ServerState};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Input(#[from] InputError),

    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Movie {0} not found")]
    NotFound(MovieId),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Catalog refresh failed: {0}")]
    Source(#[from] SourceError),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Input(_) | ApiError::Query(_) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Source(_) => StatusCode::BAD_GATEWAY,
            ApiError::Export(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            debug!("Rejected request: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}

fn lock_session(session: &GuardedSession) -> Result<MutexGuard<'_, CatalogSession>, ApiError> {
    session
        .lock()
        .map_err(|_| ApiError::Internal("Catalog session lock poisoned".to_string()))
}

#[derive(Deserialize, Debug, Default)]
pub struct SearchParams {
    pub title: Option<String>,
    pub exact_title: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub year: Option<String>,
    pub year_from: Option<String>,
    pub year_to: Option<String>,
    pub genre: Option<String>,
    pub min_rating: Option<String>,
    pub max_rating: Option<String>,
    pub comment: Option<String>,
    pub min_community_rating: Option<String>,
}

#[derive(Deserialize, Debug)]
struct SortParams {
    #[serde(rename = "sortType")]
    pub sort_type: Option<String>,
}

#[derive(Deserialize, Debug)]
struct DefaultSortBody {
    #[serde(rename = "sortType")]
    pub sort_type: String,
}

#[derive(Deserialize, Debug)]
struct TopParams {
    pub n: i64,
}

#[derive(Deserialize, Debug)]
struct ExportParams {
    pub format: Option<String>,
}

#[derive(Serialize)]
struct RefreshResponse {
    count: usize,
}

/// Builds the criteria for a search request. Parameters are added in a fixed
/// order, absent or blank ones are left out.
fn build_criteria(
    params: &SearchParams,
    input: &GuardedInputProcessor,
) -> Result<Criteria, ApiError> {
    let mut criteria = Criteria::new();

    let text_params = [
        (FilterKind::TitleKeyword, &params.title),
        (FilterKind::ExactTitle, &params.exact_title),
        (FilterKind::Director, &params.director),
        (FilterKind::Actor, &params.cast),
    ];
    for (kind, raw) in text_params {
        if let Some(text) = input.optional_text(raw.as_deref()) {
            criteria.insert(kind, text);
        }
    }

    if let Some(year) = input.optional_year(params.year.as_deref())? {
        criteria.insert(FilterKind::Year, year);
    }

    let year_from = input.optional_year_field(params.year_from.as_deref(), "year_from")?;
    let year_to = input.optional_year_field(params.year_to.as_deref(), "year_to")?;
    match (year_from, year_to) {
        (Some(from), Some(to)) => criteria.insert(FilterKind::YearRange, [from, to]),
        (None, None) => {}
        _ => {
            return Err(ApiError::BadRequest(
                "year_from and year_to must be given together".to_string(),
            ))
        }
    }

    // Unknown genre names are ignored rather than rejected.
    if let Some(genre) = input.optional_genre(params.genre.as_deref()) {
        criteria.insert(FilterKind::Genre, genre.name());
    }

    let decimal_params = [
        (FilterKind::MinRating, &params.min_rating, "min_rating"),
        (FilterKind::MaxRating, &params.max_rating, "max_rating"),
        (
            FilterKind::MinInappRating,
            &params.min_community_rating,
            "min_community_rating",
        ),
    ];
    for (kind, raw, field) in decimal_params {
        if let Some(value) = input.optional_decimal(raw.as_deref(), field)? {
            criteria.insert(kind, value);
        }
    }

    if let Some(text) = input.optional_text(params.comment.as_deref()) {
        criteria.insert(FilterKind::CommentKeyword, text);
    }

    Ok(criteria)
}

async fn get_all_movies(State(session): State<GuardedSession>) -> Result<Json<Vec<Movie>>, ApiError> {
    let session = lock_session(&session)?;
    Ok(Json(session.all_records().to_vec()))
}

async fn search_movies(
    State(session): State<GuardedSession>,
    State(input): State<GuardedInputProcessor>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let criteria = build_criteria(&params, &input)?;
    let mut session = lock_session(&session)?;
    let result = session.query(Some(&criteria))?;
    Ok(Json(result.to_vec()))
}

async fn sort_movies(
    State(session): State<GuardedSession>,
    State(input): State<GuardedInputProcessor>,
    Query(params): Query<SortParams>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let kind = input.optional_sort_kind(params.sort_type.as_deref());
    let mut session = lock_session(&session)?;
    Ok(Json(session.sort(kind).to_vec()))
}

async fn put_default_sort(
    State(session): State<GuardedSession>,
    Json(body): Json<DefaultSortBody>,
) -> Result<StatusCode, ApiError> {
    let kind = SortKind::from_token(&body.sort_type)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown sort type: {}", body.sort_type)))?;
    lock_session(&session)?.set_default_sort(kind);
    Ok(StatusCode::OK)
}

async fn get_top_movies(
    State(session): State<GuardedSession>,
    Query(params): Query<TopParams>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let session = lock_session(&session)?;
    Ok(Json(top_n(session.current_result(), params.n)))
}

async fn get_genres() -> Json<Vec<&'static str>> {
    Json(Genre::ALL.iter().map(|genre| genre.name()).collect())
}

async fn get_movie(
    State(session): State<GuardedSession>,
    Path(id): Path<MovieId>,
) -> Result<Json<Movie>, ApiError> {
    let session = lock_session(&session)?;
    match session.lookup_by_id(id) {
        Some(movie) => Ok(Json(movie.clone())),
        None => Err(ApiError::NotFound(id)),
    }
}

async fn post_comment(
    State(session): State<GuardedSession>,
    State(input): State<GuardedInputProcessor>,
    Path(id): Path<MovieId>,
    body: String,
) -> Result<String, ApiError> {
    let comment = input.validate_comment(&body)?;
    if !lock_session(&session)?.add_comment(id, comment) {
        debug!("Comment for unknown movie {} dropped", id);
    }
    Ok(comment.to_string())
}

async fn post_rating(
    State(session): State<GuardedSession>,
    State(input): State<GuardedInputProcessor>,
    Path(id): Path<MovieId>,
    body: String,
) -> Result<StatusCode, ApiError> {
    let rating = input
        .optional_decimal(Some(&body), "Rating")?
        .ok_or_else(|| ApiError::BadRequest("Rating cannot be empty".to_string()))?;
    let rating = input
        .validate_community_rating(rating)
        .inspect_err(|err| warn!("Rating for movie {} rejected: {}", id, err))?;
    if !lock_session(&session)?.add_rating(id, rating) {
        debug!("Rating for unknown movie {} dropped", id);
    }
    Ok(StatusCode::OK)
}

async fn export_movies(
    State(session): State<GuardedSession>,
    Query(params): Query<ExportParams>,
) -> Result<Response, ApiError> {
    let format = params
        .format
        .as_deref()
        .and_then(ExportFormat::from_token)
        .unwrap_or_default();

    let document = {
        let session = lock_session(&session)?;
        export(session.result_or_catalog(), format)?
    };

    let headers = [
        (header::CONTENT_TYPE, format.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", format.file_name()),
        ),
    ];
    Ok((headers, document).into_response())
}

async fn refresh_catalog(
    State(session): State<GuardedSession>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let source = lock_session(&session)?.source();
    info!("Refreshing catalog from {}", source.describe());

    let movies = tokio::task::spawn_blocking(move || source.fetch())
        .await
        .map_err(|err| ApiError::Internal(format!("Catalog refresh task failed: {}", err)))?
        .map_err(|err| {
            warn!("Catalog refresh failed: {}", err);
            ApiError::from(err)
        })?;

    let count = lock_session(&session)?.install_catalog(movies);
    Ok(Json(RefreshResponse { count }))
}

pub fn make_movie_routes(state: ServerState) -> Router {
    Router::new()
        .route("/api/movies", get(get_all_movies))
        .route("/api/movies/search", get(search_movies))
        .route("/api/movies/sort", get(sort_movies))
        .route("/api/movies/default-sort", put(put_default_sort))
        .route("/api/movies/top", get(get_top_movies))
        .route("/api/movies/genres", get(get_genres))
        .route("/api/movies/export", get(export_movies))
        .route("/api/movies/refresh", post(refresh_catalog))
        .route("/api/movies/{id}", get(get_movie))
        .route("/api/movies/{id}/comment", post(post_comment))
        .route("/api/movies/{id}/rating", post(post_rating))
        .with_state(state)
}
