//! Catalog browsing service.

use crate::domain::entities::{
    Actor, CastMember, Category, City, Comment, DailySlot, Director, Movie, Saloon,
    ShowtimeListing,
};
use crate::domain::repositories::CatalogRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Number of saloons returned by the "all saloons" listing and by a city
/// lookup with a non-numeric city ID.
pub const LISTED_SALOONS: usize = 3;

/// Number of saloons returned when a numeric city ID has no saloons.
pub const UNKNOWN_CITY_SALOONS: usize = 2;

/// Read-side service behind every GET endpoint.
///
/// Wraps the catalog repository with the lookup rules the frontend relies on:
/// - Movie lookups report [`AppError::NotFound`] for unknown IDs
/// - City filters fall back to a default saloon selection instead of failing
/// - Showtimes are joined with saloon names
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// Lists movies currently showing.
    pub async fn displaying_movies(&self) -> Result<Vec<Movie>, AppError> {
        self.repository.movies().await
    }

    /// Lists upcoming movies with premiere dates applied.
    pub async fn coming_soon_movies(&self) -> Result<Vec<Movie>, AppError> {
        self.repository.coming_soon().await
    }

    /// Retrieves a movie by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no movie has this ID.
    pub async fn movie(&self, id: i64) -> Result<Movie, AppError> {
        self.repository
            .find_movie(id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie not found", json!({ "movie_id": id })))
    }

    /// Lists saloons for the city identified by the raw path suffix `city`.
    ///
    /// # Selection rules
    ///
    /// - Numeric ID with saloons: those saloons
    /// - Numeric ID without saloons: the first [`UNKNOWN_CITY_SALOONS`] saloons
    /// - Anything else: the first [`LISTED_SALOONS`] saloons
    pub async fn saloons_by_city(&self, city: &str) -> Result<Vec<Saloon>, AppError> {
        let mut saloons = self.repository.saloons().await?;

        if city.is_empty() || !city.bytes().all(|b| b.is_ascii_digit()) {
            saloons.truncate(LISTED_SALOONS);
            return Ok(saloons);
        }

        // Digit strings too long for i64 cannot match any city.
        let city_id = city.parse::<i64>().ok();
        let in_city: Vec<Saloon> = saloons
            .iter()
            .filter(|s| Some(s.city_id) == city_id)
            .cloned()
            .collect();

        if in_city.is_empty() {
            saloons.truncate(UNKNOWN_CITY_SALOONS);
            Ok(saloons)
        } else {
            Ok(in_city)
        }
    }

    /// The saloon listing shown by the "all saloons" endpoint.
    pub async fn listed_saloons(&self) -> Result<Vec<Saloon>, AppError> {
        let mut saloons = self.repository.saloons().await?;
        saloons.truncate(LISTED_SALOONS);
        Ok(saloons)
    }

    pub async fn cities(&self) -> Result<Vec<City>, AppError> {
        self.repository.cities().await
    }

    /// Cities where a movie is screened. The same for every movie.
    pub async fn screening_cities(&self) -> Result<Vec<City>, AppError> {
        self.repository.screening_cities().await
    }

    pub async fn comments(&self) -> Result<Vec<Comment>, AppError> {
        self.repository.comments().await
    }

    pub async fn comment_count(&self) -> Result<u64, AppError> {
        self.repository.comment_count().await
    }

    /// Scheduled screenings joined with their saloon names.
    pub async fn showtime_listings(&self) -> Result<Vec<ShowtimeListing>, AppError> {
        let saloons = self.repository.saloons().await?;
        let showtimes = self.repository.showtimes().await?;

        Ok(showtimes
            .into_iter()
            .map(|showtime| {
                let saloon_name = saloons
                    .iter()
                    .find(|s| s.id == showtime.saloon_id)
                    .map(|s| s.name.clone())
                    .unwrap_or_default();
                ShowtimeListing {
                    showtime,
                    saloon_name,
                }
            })
            .collect())
    }

    /// Daily slots offered by `saloon_id` for `movie_id`.
    pub async fn daily_slots(
        &self,
        saloon_id: i64,
        movie_id: i64,
    ) -> Result<Vec<DailySlot>, AppError> {
        let slots = self.repository.daily_slots().await?;

        Ok(slots
            .into_iter()
            .map(|begin_time| DailySlot {
                begin_time,
                saloon_id,
                movie_id,
            })
            .collect())
    }

    pub async fn cast(&self) -> Result<Vec<CastMember>, AppError> {
        self.repository.cast().await
    }

    pub async fn actors(&self) -> Result<Vec<Actor>, AppError> {
        self.repository.actors().await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, AppError> {
        self.repository.categories().await
    }

    pub async fn directors(&self) -> Result<Vec<Director>, AppError> {
        self.repository.directors().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Showtime;
    use crate::domain::repositories::MockCatalogRepository;
    use chrono::{NaiveDate, NaiveTime};

    fn saloon(id: i64, city_id: i64) -> Saloon {
        Saloon {
            id,
            name: format!("Saloon {}", id),
            city_id,
        }
    }

    fn five_saloons() -> Vec<Saloon> {
        vec![
            saloon(1, 1),
            saloon(2, 1),
            saloon(3, 2),
            saloon(4, 2),
            saloon(5, 3),
        ]
    }

    fn service_with_saloons() -> CatalogService {
        let mut mock_repo = MockCatalogRepository::new();
        mock_repo
            .expect_saloons()
            .returning(|| Ok(five_saloons()));
        CatalogService::new(Arc::new(mock_repo))
    }

    fn ids(saloons: &[Saloon]) -> Vec<i64> {
        saloons.iter().map(|s| s.id).collect()
    }

    #[tokio::test]
    async fn test_movie_not_found() {
        let mut mock_repo = MockCatalogRepository::new();
        mock_repo
            .expect_find_movie()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(mock_repo));

        let result = service.movie(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_saloons_by_city_filters() {
        let service = service_with_saloons();

        let result = service.saloons_by_city("2").await.unwrap();

        assert_eq!(ids(&result), vec![3, 4]);
    }

    #[tokio::test]
    async fn test_saloons_by_unknown_numeric_city_falls_back_to_two() {
        let service = service_with_saloons();

        let result = service.saloons_by_city("99").await.unwrap();

        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_saloons_by_huge_numeric_city_falls_back_to_two() {
        let service = service_with_saloons();

        let result = service
            .saloons_by_city("99999999999999999999999")
            .await
            .unwrap();

        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_saloons_by_non_numeric_city_returns_three() {
        let service = service_with_saloons();

        for city in ["undefined", "", "1/2", "-1"] {
            let result = service.saloons_by_city(city).await.unwrap();
            assert_eq!(ids(&result), vec![1, 2, 3], "city {:?}", city);
        }
    }

    #[tokio::test]
    async fn test_listed_saloons_limit() {
        let service = service_with_saloons();

        let result = service.listed_saloons().await.unwrap();

        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_showtime_listings_join_saloon_names() {
        let mut mock_repo = MockCatalogRepository::new();
        mock_repo
            .expect_saloons()
            .returning(|| Ok(five_saloons()));
        mock_repo.expect_showtimes().returning(|| {
            Ok(vec![Showtime {
                id: 1,
                movie_id: 1,
                saloon_id: 2,
                date: NaiveDate::from_ymd_opt(2025, 10, 30).unwrap(),
                begin_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            }])
        });

        let service = CatalogService::new(Arc::new(mock_repo));

        let listings = service.showtime_listings().await.unwrap();

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].saloon_name, "Saloon 2");
        assert_eq!(listings[0].showtime.saloon_id, 2);
    }

    #[tokio::test]
    async fn test_daily_slots_stamp_ids() {
        let mut mock_repo = MockCatalogRepository::new();
        mock_repo.expect_daily_slots().returning(|| {
            Ok(vec![
                NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            ])
        });

        let service = CatalogService::new(Arc::new(mock_repo));

        let slots = service.daily_slots(4, 7).await.unwrap();

        assert_eq!(slots.len(), 2);
        assert!(slots.iter().all(|s| s.saloon_id == 4 && s.movie_id == 7));
        assert_eq!(slots[1].begin_time, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
    }
}
