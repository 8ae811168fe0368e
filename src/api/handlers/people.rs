//! Handlers for cast, actor, category and director listings.

use axum::{Json, extract::State};

use crate::api::dto::people::{ActorItem, CastItem, CategoryItem, DataEnvelope, DirectorItem};
use crate::error::AppError;
use crate::state::AppState;

/// Cast of a movie. The movie ID is not consulted.
///
/// # Endpoint
///
/// `GET /api/movie/actors/getActorsByMovieId/{...}`
pub async fn cast_handler(State(state): State<AppState>) -> Result<Json<Vec<CastItem>>, AppError> {
    let cast = state.catalog_service.cast().await?;
    tracing::info!(count = cast.len(), "Serving cast");

    Ok(Json(cast.into_iter().map(CastItem::from).collect()))
}

/// `GET /api/movie/actors/getall`
pub async fn actors_handler(
    State(state): State<AppState>,
) -> Result<Json<DataEnvelope<ActorItem>>, AppError> {
    let actors = state.catalog_service.actors().await?;
    tracing::info!(count = actors.len(), "Serving actors");

    Ok(Json(DataEnvelope::ok(
        actors.into_iter().map(ActorItem::from).collect(),
    )))
}

/// `GET /api/movie/categories/getall`
pub async fn categories_handler(
    State(state): State<AppState>,
) -> Result<Json<DataEnvelope<CategoryItem>>, AppError> {
    let categories = state.catalog_service.categories().await?;
    tracing::info!(count = categories.len(), "Serving categories");

    Ok(Json(DataEnvelope::ok(
        categories.into_iter().map(CategoryItem::from).collect(),
    )))
}

/// `GET /api/movie/directors/getall`
pub async fn directors_handler(
    State(state): State<AppState>,
) -> Result<Json<DataEnvelope<DirectorItem>>, AppError> {
    let directors = state.catalog_service.directors().await?;
    tracing::info!(count = directors.len(), "Serving directors");

    Ok(Json(DataEnvelope::ok(
        directors.into_iter().map(DirectorItem::from).collect(),
    )))
}
