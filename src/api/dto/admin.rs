//! DTOs for admin catalog additions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::wall_clock;
use crate::domain::entities::{AddedDirector, AddedMovie, NewDirector, NewMovie};

/// "Movie added successfully!"
pub const MOVIE_ADDED_MESSAGE: &str = "Thêm phim thành công!";
/// "Director added successfully!"
pub const DIRECTOR_ADDED_MESSAGE: &str = "Thêm đạo diễn thành công!";

/// Body of `POST /api/movie/movies/add`. Only the name is echoed back.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMovieRequest {
    #[serde(default, deserialize_with = "super::present")]
    pub movie_name: Option<Value>,
}

impl From<AddMovieRequest> for NewMovie {
    fn from(r: AddMovieRequest) -> Self {
        Self { name: r.movie_name }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMovieResponse {
    pub success: bool,
    pub message: &'static str,
    pub movie_id: i64,
    pub data: AddedMovieData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedMovieData {
    pub id: i64,
    pub movie_id: i64,
    pub movie_name: Value,
    pub added_at: String,
}

impl From<AddedMovie> for AddMovieResponse {
    fn from(m: AddedMovie) -> Self {
        Self {
            success: true,
            message: MOVIE_ADDED_MESSAGE,
            movie_id: m.id,
            data: AddedMovieData {
                id: m.id,
                movie_id: m.id,
                movie_name: m.name,
                added_at: wall_clock(&m.added_at),
            },
        }
    }
}

/// Body of `POST /api/movie/directors/add`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDirectorRequest {
    #[serde(default, deserialize_with = "super::present")]
    pub director_name: Option<Value>,
}

impl From<AddDirectorRequest> for NewDirector {
    fn from(r: AddDirectorRequest) -> Self {
        Self {
            name: r.director_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddDirectorResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: AddedDirectorData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedDirectorData {
    pub director_id: i64,
    pub id: i64,
    pub director_name: Value,
    pub added_at: String,
}

impl From<AddedDirector> for AddDirectorResponse {
    fn from(d: AddedDirector) -> Self {
        Self {
            success: true,
            message: DIRECTOR_ADDED_MESSAGE,
            data: AddedDirectorData {
                director_id: d.id,
                id: d.id,
                director_name: d.name,
                added_at: wall_clock(&d.added_at),
            },
        }
    }
}
