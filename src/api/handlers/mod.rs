//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod accounts;
pub mod admin;
pub mod comments;
pub mod fallback;
pub mod health;
pub mod movies;
pub mod payments;
pub mod people;
pub mod showtimes;
pub mod venues;

pub use accounts::{login_handler, register_handler};
pub use admin::{add_director_handler, add_movie_handler};
pub use comments::{
    add_comment_handler, comment_count_handler, comments_handler, delete_comment_handler,
};
pub use fallback::fallback_handler;
pub use health::health_handler;
pub use movies::{coming_soon_handler, displaying_movies_handler, movie_handler};
pub use payments::send_ticket_handler;
pub use people::{actors_handler, cast_handler, categories_handler, directors_handler};
pub use showtimes::{daily_slots_handler, showtimes_handler};
pub use venues::{
    cities_handler, saloons_by_city_handler, saloons_handler, screening_cities_handler,
};

/// Last `/`-separated segment of a request path.
pub(crate) fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

/// Everything after the last occurrence of the first `markers` entry found in `path`.
pub(crate) fn path_suffix<'a>(path: &'a str, markers: &[&str]) -> &'a str {
    markers
        .iter()
        .find_map(|marker| path.rsplit_once(marker))
        .map(|(_, rest)| rest)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("/api/movie/movies/3"), "3");
        assert_eq!(last_segment("/api/movie/movies/getmoviebyid/42"), "42");
        assert_eq!(last_segment("/api/movie/saloons/getByCityId/"), "");
        assert_eq!(last_segment(""), "");
    }

    #[test]
    fn test_path_suffix_keeps_nested_segments() {
        let markers = ["/getByCityId/", "/getSaloonsByCityId/"];
        assert_eq!(path_suffix("/api/movie/saloons/getByCityId/2", &markers), "2");
        assert_eq!(path_suffix("/api/movie/saloons/getByCityId/1/2", &markers), "1/2");
        assert_eq!(
            path_suffix("/api/movie/saloons/getSaloonsByCityId/3", &markers),
            "3"
        );
        assert_eq!(path_suffix("/api/movie/saloons/getall", &markers), "");
    }
}
