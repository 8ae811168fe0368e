//! Handlers for admin catalog additions.

use axum::{Json, extract::State};

use crate::api::dto::admin::{
    AddDirectorRequest, AddDirectorResponse, AddMovieRequest, AddMovieResponse,
};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Acknowledges a new movie. The catalog is not modified, so the returned
/// ID is the same for every call.
///
/// # Endpoint
///
/// `POST /api/movie/movies/add`
pub async fn add_movie_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddMovieRequest>,
) -> Result<Json<AddMovieResponse>, AppError> {
    tracing::debug!(?payload, "Movie received");

    let movie = state.admin_service.add_movie(payload.into()).await?;
    tracing::info!(movie_id = movie.id, name = %movie.name, "Movie added");

    Ok(Json(movie.into()))
}

/// Acknowledges a new director.
///
/// # Endpoint
///
/// `POST /api/movie/directors/add`
pub async fn add_director_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddDirectorRequest>,
) -> Json<AddDirectorResponse> {
    tracing::debug!(?payload, "Director received");

    let director = state.admin_service.add_director(payload.into());
    tracing::info!(director_id = director.id, name = %director.name, "Director added");

    Json(director.into())
}
