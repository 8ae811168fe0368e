//! Handlers for cities and saloons.

use axum::{Json, extract::State, http::Uri};

use crate::api::dto::venue::{CityItem, SaloonItem};
use crate::api::handlers::path_suffix;
use crate::error::AppError;
use crate::state::AppState;

const CITY_MARKERS: &[&str] = &["/getByCityId/", "/getSaloonsByCityId/"];

/// Lists the saloons of the city named by the rest of the path.
///
/// # Endpoints
///
/// - `GET /api/movie/saloons/getByCityId/{cityId}`
/// - `GET /api/movie/saloons/getSaloonsByCityId/{cityId}`
///
/// The city ID is the whole raw suffix after the endpoint name, so
/// `getByCityId/1/2` asks for city `1/2`. Unknown or non-numeric city IDs
/// fall back to a fixed saloon subset instead of an error.
pub async fn saloons_by_city_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<Vec<SaloonItem>>, AppError> {
    let city = path_suffix(uri.path(), CITY_MARKERS);
    let saloons = state.catalog_service.saloons_by_city(city).await?;
    tracing::info!(%city, count = saloons.len(), "Serving saloons by city");

    Ok(Json(saloons.into_iter().map(SaloonItem::from).collect()))
}

/// `GET /api/movie/saloons/getall`
pub async fn saloons_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SaloonItem>>, AppError> {
    let saloons = state.catalog_service.listed_saloons().await?;
    tracing::info!(count = saloons.len(), "Serving saloons");

    Ok(Json(saloons.into_iter().map(SaloonItem::from).collect()))
}

/// `GET /api/movie/cities/getall`
pub async fn cities_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CityItem>>, AppError> {
    let cities = state.catalog_service.cities().await?;
    tracing::info!(count = cities.len(), "Serving cities");

    Ok(Json(cities.into_iter().map(CityItem::from).collect()))
}

/// Cities screening a movie. The movie ID is not consulted.
///
/// # Endpoint
///
/// `GET /api/movie/cities/getCitiesByMovieId/{...}`
pub async fn screening_cities_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CityItem>>, AppError> {
    let cities = state.catalog_service.screening_cities().await?;
    tracing::info!(count = cities.len(), "Serving screening cities");

    Ok(Json(cities.into_iter().map(CityItem::from).collect()))
}
