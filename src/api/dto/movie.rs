//! DTOs for movie endpoints.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::Movie;

/// A movie as the frontend reads it.
///
/// Different frontend pages read different names for the same attribute, so
/// each one is emitted under both names.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: i64,
    pub movie_id: i64,
    pub movie_name: String,
    pub movie_poster: String,
    pub movie_image_url: String,
    pub description: String,
    pub movie_description: String,
    pub movie_trailer_url: String,
    pub movie_trailer: String,
    pub director_name: String,
    pub movie_director: String,
    pub release_date: NaiveDate,
    pub movie_release_date: NaiveDate,
    pub duration: u32,
    pub movie_duration: u32,
    pub category_name: String,
    pub movie_category: String,
    pub rating: f64,
}

impl From<Movie> for MovieResponse {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            movie_id: m.id,
            movie_name: m.name,
            movie_poster: m.poster_url.clone(),
            movie_image_url: m.poster_url,
            description: m.description.clone(),
            movie_description: m.description,
            movie_trailer_url: m.trailer_url.clone(),
            movie_trailer: m.trailer_url,
            director_name: m.director.clone(),
            movie_director: m.director,
            release_date: m.release_date,
            movie_release_date: m.release_date,
            duration: m.duration,
            movie_duration: m.duration,
            category_name: m.category.clone(),
            movie_category: m.category,
            rating: m.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_response_field_names() {
        let movie = Movie {
            id: 3,
            name: "The Batman".to_string(),
            poster_url: "https://image.example/3.jpg".to_string(),
            description: "Gotham.".to_string(),
            trailer_url: "https://video.example/3".to_string(),
            director: "Matt Reeves".to_string(),
            release_date: NaiveDate::from_ymd_opt(2022, 3, 4).unwrap(),
            duration: 176,
            category: "Action, Crime, Drama".to_string(),
            rating: 7.8,
        };

        let json = serde_json::to_value(MovieResponse::from(movie)).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["movieId"], 3);
        assert_eq!(json["movieName"], "The Batman");
        assert_eq!(json["moviePoster"], json["movieImageUrl"]);
        assert_eq!(json["movieTrailerUrl"], json["movieTrailer"]);
        assert_eq!(json["directorName"], "Matt Reeves");
        assert_eq!(json["movieDirector"], "Matt Reeves");
        assert_eq!(json["releaseDate"], "2022-03-04");
        assert_eq!(json["movieReleaseDate"], "2022-03-04");
        assert_eq!(json["duration"], 176);
        assert_eq!(json["movieDuration"], 176);
        assert_eq!(json["categoryName"], json["movieCategory"]);
        assert_eq!(json["rating"], 7.8);
        assert_eq!(json.as_object().unwrap().len(), 18);
    }
}
