use anyhow::{Context, Result};
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use axum::{
    extract::State,
    http::{header, HeaderValue, Method},
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::movies::make_movie_routes;
use super::{log_requests, state::*, ServerConfig};
use crate::input::InputProcessor;
use crate::query::SortKind;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub catalog_size: usize,
    pub current_result_size: usize,
    pub default_sort: SortKind,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let (catalog_size, current_result_size, default_sort) = match state.session.lock() {
        Ok(session) => (
            session.all_records().len(),
            session.current_result().len(),
            session.default_sort(),
        ),
        Err(_) => (0, 0, SortKind::default()),
    };
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        catalog_size,
        current_result_size,
        default_sort,
    };
    Json(stats)
}

fn make_cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("Invalid CORS origin {:?}", origin))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE]))
}

pub fn make_app(
    config: ServerConfig,
    session: GuardedSession,
    input_processor: InputProcessor,
) -> Result<Router> {
    let state = ServerState::new(config.clone(), session, input_processor);

    let movie_routes = make_movie_routes(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    let mut app: Router = home_router.merge(movie_routes);

    if let Some(origin) = config.cors_origin.as_deref() {
        app = app.layer(make_cors_layer(origin)?);
    }
    app = app.layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

pub async fn run_server(
    config: ServerConfig,
    session: GuardedSession,
    input_processor: InputProcessor,
) -> Result<()> {
    let port = config.port;
    let app = make_app(config, session, input_processor)?;

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .with_context(|| format!("Could not bind port {}", port))?;
    info!("Listening on {}", listener.local_addr()?);

    Ok(axum::serve(listener, app).await?)
}
