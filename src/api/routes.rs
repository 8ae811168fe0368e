//! API route configuration.
//!
//! Paths are spelled out in full because the frontend calls them verbatim.
//! Routes documented with `{...}` accept any suffix; their handlers read the
//! last path segment themselves.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    actors_handler, add_comment_handler, add_director_handler, add_movie_handler, cast_handler,
    categories_handler, cities_handler, comment_count_handler, comments_handler,
    coming_soon_handler, daily_slots_handler, delete_comment_handler, directors_handler,
    displaying_movies_handler, login_handler, movie_handler, register_handler,
    saloons_by_city_handler, saloons_handler, screening_cities_handler, send_ticket_handler,
    showtimes_handler,
};
use crate::state::AppState;

/// One row of the endpoint listing shown by `routes` and the startup banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const fn route(
    method: &'static str,
    path: &'static str,
    description: &'static str,
) -> RouteInfo {
    RouteInfo {
        method,
        path,
        description,
    }
}

/// Every endpoint the mock serves, in display order.
pub const ROUTE_TABLE: &[RouteInfo] = &[
    route("GET", "/health", "Health check"),
    route("GET", "/api/movie/movies/displayingMovies", "Movies now showing"),
    route("GET", "/api/movie/movies/comingSoonMovies", "Upcoming movies"),
    route("GET", "/api/movie/movies/{...}/{id}", "Movie details by ID"),
    route("GET", "/api/movie/saloons/getByCityId/{cityId}", "Saloons in a city"),
    route("GET", "/api/movie/saloons/getSaloonsByCityId/{cityId}", "Saloons in a city"),
    route("GET", "/api/movie/saloons/getall", "All saloons"),
    route("GET", "/api/movie/cities/getall", "All cities"),
    route("GET", "/api/movie/cities/getCitiesByMovieId/{movieId}", "Cities screening a movie"),
    route("GET", "/api/movie/comments/getCountOfComments/{movieId}", "Comment count"),
    route("GET", "/api/movie/comments/getCommentsByMovieId/{movieId}", "Comments on a movie"),
    route("GET", "/api/movie/saloonTimes/getSaloonTimesByMovieId/{movieId}", "Scheduled showtimes"),
    route(
        "GET",
        "/api/movie/saloonTimes/getMovieSaloonTimeSaloonAndMovieId/{saloonId}/{movieId}",
        "Daily slots for a saloon and movie",
    ),
    route("GET", "/api/movie/actors/getActorsByMovieId/{movieId}", "Cast of a movie"),
    route("GET", "/api/movie/actors/getall", "All actors"),
    route("GET", "/api/movie/categories/getall", "All categories"),
    route("GET", "/api/movie/directors/getall", "All directors"),
    route("POST", "/api/movie/payments/sendTicketDetail", "Book tickets"),
    route("POST", "/api/user/users/add", "Register a user"),
    route("POST", "/api/user/auth/login", "Log in"),
    route("POST", "/api/movie/comments/add", "Post a comment"),
    route("POST", "/api/movie/comments/delete", "Delete a comment"),
    route("POST", "/api/movie/movies/add", "Add a movie (admin)"),
    route("POST", "/api/movie/directors/add", "Add a director (admin)"),
];

/// Movie catalog routes.
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/movie/movies/displayingMovies",
            get(displaying_movies_handler),
        )
        .route(
            "/api/movie/movies/comingSoonMovies",
            get(coming_soon_handler),
        )
        .route("/api/movie/movies/add", post(add_movie_handler))
        .route("/api/movie/movies/{*rest}", get(movie_handler))
        .route("/api/movie/directors/add", post(add_director_handler))
        .route("/api/movie/directors/getall", get(directors_handler))
        .route("/api/movie/categories/getall", get(categories_handler))
        .route("/api/movie/actors/getall", get(actors_handler))
        .route(
            "/api/movie/actors/getActorsByMovieId/{*rest}",
            get(cast_handler),
        )
}

/// City, saloon and showtime routes.
fn venue_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/movie/saloons/getByCityId/{*rest}",
            get(saloons_by_city_handler),
        )
        .route(
            "/api/movie/saloons/getSaloonsByCityId/{*rest}",
            get(saloons_by_city_handler),
        )
        .route("/api/movie/saloons/getall", get(saloons_handler))
        .route("/api/movie/cities/getall", get(cities_handler))
        .route(
            "/api/movie/cities/getCitiesByMovieId/{*rest}",
            get(screening_cities_handler),
        )
        .route(
            "/api/movie/saloonTimes/getSaloonTimesByMovieId/{*rest}",
            get(showtimes_handler),
        )
        .route(
            "/api/movie/saloonTimes/getMovieSaloonTimeSaloonAndMovieId/{saloon_id}/{movie_id}",
            get(daily_slots_handler),
        )
}

/// Comment, payment and account routes.
fn interaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/movie/comments/getCountOfComments/{*rest}",
            get(comment_count_handler),
        )
        .route(
            "/api/movie/comments/getCommentsByMovieId/{*rest}",
            get(comments_handler),
        )
        .route("/api/movie/comments/add", post(add_comment_handler))
        .route("/api/movie/comments/delete", post(delete_comment_handler))
        .route(
            "/api/movie/payments/sendTicketDetail",
            post(send_ticket_handler),
        )
        .route("/api/user/users/add", post(register_handler))
        .route("/api/user/auth/login", post(login_handler))
}

/// All API routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(movie_routes())
        .merge(venue_routes())
        .merge(interaction_routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_paths_are_unique_per_method() {
        let mut seen = std::collections::HashSet::new();
        for r in ROUTE_TABLE {
            assert!(seen.insert((r.method, r.path)), "duplicate {} {}", r.method, r.path);
        }
    }

    #[test]
    fn test_route_table_methods() {
        assert!(ROUTE_TABLE.iter().all(|r| r.method == "GET" || r.method == "POST"));
        assert_eq!(ROUTE_TABLE.iter().filter(|r| r.method == "POST").count(), 7);
    }
}
