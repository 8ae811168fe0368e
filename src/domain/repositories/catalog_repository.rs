//! Repository trait for read-only catalog access.

use crate::domain::entities::{
    Actor, CastMember, Category, City, Comment, Director, Movie, Saloon, Showtime,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveTime;

/// Repository interface for the mock cinema catalog.
///
/// Every method is a read; the catalog never changes after start-up.
///
/// # Implementations
///
/// - [`crate::infrastructure::fixtures::FixtureCatalog`] - In-memory fixture document
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Lists every movie currently showing, in catalog order.
    async fn movies(&self) -> Result<Vec<Movie>, AppError>;

    /// Lists upcoming movies with their premiere dates applied.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if an entry references a missing movie.
    async fn coming_soon(&self) -> Result<Vec<Movie>, AppError>;

    /// Finds a movie by its ID.
    async fn find_movie(&self, id: i64) -> Result<Option<Movie>, AppError>;

    /// Lists all saloons in catalog order.
    async fn saloons(&self) -> Result<Vec<Saloon>, AppError>;

    /// Lists all cities in catalog order.
    async fn cities(&self) -> Result<Vec<City>, AppError>;

    /// Lists the cities where movies are screened.
    async fn screening_cities(&self) -> Result<Vec<City>, AppError>;

    /// Lists the comments shown on movie detail pages.
    async fn comments(&self) -> Result<Vec<Comment>, AppError>;

    /// Returns the advertised number of comments per movie.
    async fn comment_count(&self) -> Result<u64, AppError>;

    /// Lists scheduled screenings.
    async fn showtimes(&self) -> Result<Vec<Showtime>, AppError>;

    /// Returns the slot times every saloon offers each day.
    async fn daily_slots(&self) -> Result<Vec<NaiveTime>, AppError>;

    /// Lists credited actors with their characters.
    async fn cast(&self) -> Result<Vec<CastMember>, AppError>;

    async fn actors(&self) -> Result<Vec<Actor>, AppError>;

    async fn categories(&self) -> Result<Vec<Category>, AppError>;

    async fn directors(&self) -> Result<Vec<Director>, AppError>;
}
