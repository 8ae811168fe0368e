//! Admin catalog additions.

use crate::domain::clock::Clock;
use crate::domain::entities::{AddedDirector, AddedMovie, NewDirector, NewMovie};
use crate::domain::repositories::CatalogRepository;
use crate::error::AppError;
use serde_json::Value;
use std::sync::Arc;

const DEFAULT_MOVIE_NAME: &str = "New Movie";
const DEFAULT_DIRECTOR_NAME: &str = "New Director";

/// Base of generated director IDs; the Unix time modulo 1000 is added to it.
const DIRECTOR_ID_BASE: i64 = 100;

/// Acknowledges admin additions to the catalog.
///
/// The catalog is immutable, so additions are never visible in later reads.
/// New movies get the ID the next catalog entry would have.
pub struct AdminService {
    repository: Arc<dyn CatalogRepository>,
    clock: Arc<dyn Clock>,
}

impl AdminService {
    pub fn new(repository: Arc<dyn CatalogRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Acknowledges a new movie with ID `movie count + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the catalog cannot be read.
    pub async fn add_movie(&self, movie: NewMovie) -> Result<AddedMovie, AppError> {
        let count = self.repository.movies().await?.len();

        Ok(AddedMovie {
            id: count as i64 + 1,
            name: movie.name.unwrap_or_else(|| Value::from(DEFAULT_MOVIE_NAME)),
            added_at: self.clock.now(),
        })
    }

    /// Acknowledges a new director with an ID in `100..1100`.
    pub fn add_director(&self, director: NewDirector) -> AddedDirector {
        let now = self.clock.now();

        AddedDirector {
            id: DIRECTOR_ID_BASE + now.timestamp().rem_euclid(1000),
            name: director
                .name
                .unwrap_or_else(|| Value::from(DEFAULT_DIRECTOR_NAME)),
            added_at: now,
        }
    }
}
