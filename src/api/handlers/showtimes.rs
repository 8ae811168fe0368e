//! Handlers for showtime ("saloon time") endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::showtime::{DailySlotItem, ShowtimeItem};
use crate::error::AppError;
use crate::state::AppState;

/// Scheduled showtimes for a movie. The movie ID is not consulted.
///
/// # Endpoint
///
/// `GET /api/movie/saloonTimes/getSaloonTimesByMovieId/{...}`
pub async fn showtimes_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShowtimeItem>>, AppError> {
    let listings = state.catalog_service.showtime_listings().await?;
    tracing::info!(count = listings.len(), "Serving showtimes");

    Ok(Json(listings.into_iter().map(ShowtimeItem::from).collect()))
}

/// Daily slots for one saloon and movie; both IDs are stamped on every slot.
///
/// # Endpoint
///
/// `GET /api/movie/saloonTimes/getMovieSaloonTimeSaloonAndMovieId/{saloonId}/{movieId}`
///
/// # Errors
///
/// Returns 400 if either ID is not an integer.
pub async fn daily_slots_handler(
    State(state): State<AppState>,
    Path((saloon_id, movie_id)): Path<(String, String)>,
) -> Result<Json<Vec<DailySlotItem>>, AppError> {
    let (Ok(saloon), Ok(movie)) = (saloon_id.parse::<i64>(), movie_id.parse::<i64>()) else {
        tracing::warn!(%saloon_id, %movie_id, "Non-integer showtime IDs");
        return Err(AppError::bad_request(
            "Invalid saloon or movie id",
            json!({ "saloonId": saloon_id, "movieId": movie_id }),
        ));
    };

    let slots = state.catalog_service.daily_slots(saloon, movie).await?;
    tracing::info!(saloon_id = saloon, movie_id = movie, "Serving daily slots");

    Ok(Json(slots.into_iter().map(DailySlotItem::from).collect()))
}
