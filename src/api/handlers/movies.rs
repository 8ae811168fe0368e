//! Handlers for movie listing and lookup.

use axum::{Json, extract::State, http::Uri};
use serde_json::Value;

use crate::api::dto::movie::MovieResponse;
use crate::api::handlers::last_segment;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the movies currently showing.
///
/// # Endpoint
///
/// `GET /api/movie/movies/displayingMovies`
pub async fn displaying_movies_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieResponse>>, AppError> {
    let movies = state.catalog_service.displaying_movies().await?;
    tracing::info!(count = movies.len(), "Serving displaying movies");

    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

/// Lists upcoming movies, with premiere dates applied where known.
///
/// # Endpoint
///
/// `GET /api/movie/movies/comingSoonMovies`
pub async fn coming_soon_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieResponse>>, AppError> {
    let movies = state.catalog_service.coming_soon_movies().await?;
    tracing::info!(count = movies.len(), "Serving coming soon movies");

    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

/// Looks up a single movie by the last path segment.
///
/// # Endpoint
///
/// `GET /api/movie/movies/{...}/{id}`
///
/// Any prefix is accepted before the ID, so `/api/movie/movies/3` and
/// `/api/movie/movies/getmoviebyid/3` are equivalent.
///
/// # Errors
///
/// - **404** `Movie not found` when the ID is numeric but unknown
/// - **404** `Endpoint not found` when the last segment is not numeric
pub async fn movie_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<MovieResponse>, AppError> {
    let segment = last_segment(uri.path());

    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        tracing::warn!(path = %uri.path(), "Unknown movie endpoint");
        return Err(AppError::not_found("Endpoint not found", Value::Null));
    }

    let Ok(id) = segment.parse::<i64>() else {
        return Err(AppError::not_found("Movie not found", Value::Null));
    };

    let movie = state.catalog_service.movie(id).await?;
    tracing::info!(movie_id = id, "Serving movie details");

    Ok(Json(movie.into()))
}
