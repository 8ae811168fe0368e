//! In-memory catalog backed by the fixture document.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::NaiveTime;
use serde_json::json;
use std::collections::HashSet;
use std::path::Path;

use super::document::FixtureDocument;
use crate::domain::entities::{
    Actor, CastMember, Category, City, ComingSoonEntry, Comment, Director, Movie, Saloon, Showtime,
};
use crate::domain::repositories::CatalogRepository;
use crate::error::AppError;

/// Fixture document compiled into the binary.
const EMBEDDED_FIXTURES: &str = include_str!("../../../fixtures/catalog.json");

/// Format of slot and showtime begin times in the fixture document.
const SLOT_TIME_FORMAT: &str = "%H:%M";

/// Immutable catalog built once at start-up.
///
/// All cross references (coming-soon entries, cast, showtimes, saloons,
/// screening cities) are resolved and checked while loading, so lookups
/// never fail at request time.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    movies: Vec<Movie>,
    coming_soon: Vec<ComingSoonEntry>,
    cities: Vec<City>,
    saloons: Vec<Saloon>,
    comments: Vec<Comment>,
    comment_count: u64,
    showtimes: Vec<Showtime>,
    daily_slots: Vec<NaiveTime>,
    actors: Vec<Actor>,
    cast: Vec<CastMember>,
    categories: Vec<Category>,
    directors: Vec<Director>,
    screening_cities: Vec<City>,
}

/// Entity counts, reported by the `fixtures` CLI command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSummary {
    pub movies: usize,
    pub coming_soon: usize,
    pub cities: usize,
    pub saloons: usize,
    pub comments: usize,
    pub showtimes: usize,
    pub daily_slots: usize,
    pub actors: usize,
    pub categories: usize,
    pub directors: usize,
}

impl FixtureCatalog {
    /// Loads the fixture document compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document is malformed.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_FIXTURES).context("Embedded fixture document is invalid")
    }

    /// Loads a fixture document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixtures from {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Fixture document {} is invalid", path.display()))
    }

    /// Loads fixtures from `path` when given, otherwise the embedded document.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("Loading fixtures from {}", path.display());
                Self::from_file(path)
            }
            None => Self::embedded(),
        }
    }

    /// Parses and validates a fixture document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let document: FixtureDocument =
            serde_json::from_str(raw).context("Fixture document is not valid JSON")?;
        Self::from_document(document)
    }

    /// Converts a parsed document into a catalog, resolving every reference.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two movies share an ID
    /// - A coming-soon entry, showtime or cast entry references a missing record
    /// - A saloon or screening city references a missing city
    /// - A slot or showtime time is not `HH:MM`
    pub fn from_document(doc: FixtureDocument) -> Result<Self> {
        let mut movie_ids = HashSet::new();
        let movies: Vec<Movie> = doc
            .movies
            .into_iter()
            .map(|m| Movie {
                id: m.id,
                name: m.name,
                poster_url: m.poster_url,
                description: m.description,
                trailer_url: m.trailer_url,
                director: m.director,
                release_date: m.release_date,
                duration: m.duration,
                category: m.category,
                rating: m.rating,
            })
            .collect();
        for movie in &movies {
            if !movie_ids.insert(movie.id) {
                bail!("Duplicate movie id {}", movie.id);
            }
        }

        let coming_soon = doc
            .coming_soon
            .into_iter()
            .map(|entry| {
                if !movie_ids.contains(&entry.movie_id) {
                    bail!("Coming-soon entry references unknown movie {}", entry.movie_id);
                }
                Ok(ComingSoonEntry {
                    movie_id: entry.movie_id,
                    premiere_date: entry.premiere_date,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let cities: Vec<City> = doc
            .cities
            .into_iter()
            .map(|c| City {
                id: c.id,
                name: c.name,
            })
            .collect();
        let find_city = |id: i64| cities.iter().find(|c| c.id == id);

        let saloons = doc
            .saloons
            .into_iter()
            .map(|s| {
                if find_city(s.city_id).is_none() {
                    bail!("Saloon {} references unknown city {}", s.id, s.city_id);
                }
                Ok(Saloon {
                    id: s.id,
                    name: s.name,
                    city_id: s.city_id,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let screening_cities = doc
            .screening_city_ids
            .iter()
            .map(|&id| {
                find_city(id)
                    .cloned()
                    .with_context(|| format!("Screening city {} does not exist", id))
            })
            .collect::<Result<Vec<_>>>()?;

        let showtimes = doc
            .showtimes
            .into_iter()
            .map(|s| {
                if !movie_ids.contains(&s.movie_id) {
                    bail!("Showtime {} references unknown movie {}", s.id, s.movie_id);
                }
                if !saloons.iter().any(|saloon| saloon.id == s.saloon_id) {
                    bail!("Showtime {} references unknown saloon {}", s.id, s.saloon_id);
                }
                Ok(Showtime {
                    id: s.id,
                    movie_id: s.movie_id,
                    saloon_id: s.saloon_id,
                    date: s.date,
                    begin_time: parse_slot_time(&s.begin_time)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let daily_slots = doc
            .daily_slots
            .iter()
            .map(|raw| parse_slot_time(raw))
            .collect::<Result<Vec<_>>>()?;

        let actors: Vec<Actor> = doc
            .actors
            .into_iter()
            .map(|a| Actor {
                id: a.id,
                name: a.name,
            })
            .collect();

        let cast = doc
            .cast
            .into_iter()
            .map(|c| {
                let actor = actors
                    .iter()
                    .find(|a| a.id == c.actor_id)
                    .cloned()
                    .with_context(|| format!("Cast entry references unknown actor {}", c.actor_id))?;
                Ok(CastMember {
                    actor,
                    character: c.character,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let comments = doc
            .comments
            .into_iter()
            .map(|c| Comment {
                id: c.id,
                content: c.content,
                author: c.author,
                created_at: c.created_at,
            })
            .collect();

        let categories = doc
            .categories
            .into_iter()
            .map(|c| Category {
                id: c.id,
                name: c.name,
            })
            .collect();

        let directors = doc
            .directors
            .into_iter()
            .map(|d| Director {
                id: d.id,
                name: d.name,
            })
            .collect();

        Ok(Self {
            movies,
            coming_soon,
            cities,
            saloons,
            comments,
            comment_count: doc.comment_count,
            showtimes,
            daily_slots,
            actors,
            cast,
            categories,
            directors,
            screening_cities,
        })
    }

    pub fn summary(&self) -> FixtureSummary {
        FixtureSummary {
            movies: self.movies.len(),
            coming_soon: self.coming_soon.len(),
            cities: self.cities.len(),
            saloons: self.saloons.len(),
            comments: self.comments.len(),
            showtimes: self.showtimes.len(),
            daily_slots: self.daily_slots.len(),
            actors: self.actors.len(),
            categories: self.categories.len(),
            directors: self.directors.len(),
        }
    }
}

fn parse_slot_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, SLOT_TIME_FORMAT)
        .with_context(|| format!("Invalid time '{}', expected HH:MM", raw))
}

#[async_trait]
impl CatalogRepository for FixtureCatalog {
    async fn movies(&self) -> Result<Vec<Movie>, AppError> {
        Ok(self.movies.clone())
    }

    async fn coming_soon(&self) -> Result<Vec<Movie>, AppError> {
        self.coming_soon
            .iter()
            .map(|entry| {
                let movie = self
                    .movies
                    .iter()
                    .find(|m| m.id == entry.movie_id)
                    .ok_or_else(|| {
                        AppError::internal(
                            "Coming-soon entry references a missing movie",
                            json!({ "movie_id": entry.movie_id }),
                        )
                    })?;
                Ok(match entry.premiere_date {
                    Some(date) => movie.with_release_date(date),
                    None => movie.clone(),
                })
            })
            .collect()
    }

    async fn find_movie(&self, id: i64) -> Result<Option<Movie>, AppError> {
        Ok(self.movies.iter().find(|m| m.id == id).cloned())
    }

    async fn saloons(&self) -> Result<Vec<Saloon>, AppError> {
        Ok(self.saloons.clone())
    }

    async fn cities(&self) -> Result<Vec<City>, AppError> {
        Ok(self.cities.clone())
    }

    async fn screening_cities(&self) -> Result<Vec<City>, AppError> {
        Ok(self.screening_cities.clone())
    }

    async fn comments(&self) -> Result<Vec<Comment>, AppError> {
        Ok(self.comments.clone())
    }

    async fn comment_count(&self) -> Result<u64, AppError> {
        Ok(self.comment_count)
    }

    async fn showtimes(&self) -> Result<Vec<Showtime>, AppError> {
        Ok(self.showtimes.clone())
    }

    async fn daily_slots(&self) -> Result<Vec<NaiveTime>, AppError> {
        Ok(self.daily_slots.clone())
    }

    async fn cast(&self) -> Result<Vec<CastMember>, AppError> {
        Ok(self.cast.clone())
    }

    async fn actors(&self) -> Result<Vec<Actor>, AppError> {
        Ok(self.actors.clone())
    }

    async fn categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.categories.clone())
    }

    async fn directors(&self) -> Result<Vec<Director>, AppError> {
        Ok(self.directors.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::Value;

    fn minimal_document() -> Value {
        json!({
            "movies": [{
                "id": 1,
                "name": "Test Movie",
                "posterUrl": "https://image.example/1.jpg",
                "description": "A test.",
                "trailerUrl": "https://video.example/1",
                "director": "Someone",
                "releaseDate": "2020-01-01",
                "duration": 100,
                "category": "Drama",
                "rating": 7.5
            }],
            "comingSoon": [{ "movieId": 1, "premiereDate": "2030-01-01" }],
            "cities": [{ "id": 1, "name": "Hà Nội" }],
            "saloons": [{ "id": 1, "name": "Hall", "cityId": 1 }],
            "comments": [],
            "commentCount": 0,
            "showtimes": [{ "id": 1, "movieId": 1, "saloonId": 1, "date": "2025-10-30", "beginTime": "14:00" }],
            "dailySlots": ["10:00"],
            "actors": [{ "id": 1, "name": "Actor" }],
            "cast": [{ "actorId": 1, "character": "Hero" }],
            "categories": [],
            "directors": [],
            "screeningCityIds": [1]
        })
    }

    #[test]
    fn test_embedded_fixtures_load() {
        let catalog = FixtureCatalog::embedded().unwrap();
        let summary = catalog.summary();

        assert_eq!(summary.movies, 8);
        assert_eq!(summary.coming_soon, 3);
        assert_eq!(summary.cities, 3);
        assert_eq!(summary.saloons, 5);
        assert_eq!(summary.comments, 4);
        assert_eq!(summary.showtimes, 3);
        assert_eq!(summary.daily_slots, 5);
        assert_eq!(summary.actors, 5);
        assert_eq!(summary.categories, 5);
        assert_eq!(summary.directors, 5);
    }

    #[test]
    fn test_minimal_document_loads() {
        let catalog = FixtureCatalog::from_json(&minimal_document().to_string()).unwrap();

        assert_eq!(catalog.summary().movies, 1);
        assert_eq!(catalog.cast[0].actor.name, "Actor");
        assert_eq!(catalog.screening_cities[0].name, "Hà Nội");
        assert_eq!(
            catalog.showtimes[0].begin_time,
            NaiveTime::from_hms_opt(14, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(FixtureCatalog::from_json("{ not json").is_err());
    }

    #[test]
    fn test_rejects_duplicate_movie_ids() {
        let mut doc = minimal_document();
        let movie = doc["movies"][0].clone();
        doc["movies"].as_array_mut().unwrap().push(movie);

        assert!(FixtureCatalog::from_json(&doc.to_string()).is_err());
    }

    #[test]
    fn test_rejects_unknown_coming_soon_movie() {
        let mut doc = minimal_document();
        doc["comingSoon"] = json!([{ "movieId": 99 }]);

        assert!(FixtureCatalog::from_json(&doc.to_string()).is_err());
    }

    #[test]
    fn test_rejects_saloon_in_unknown_city() {
        let mut doc = minimal_document();
        doc["saloons"][0]["cityId"] = json!(7);

        assert!(FixtureCatalog::from_json(&doc.to_string()).is_err());
    }

    #[test]
    fn test_rejects_unknown_cast_actor() {
        let mut doc = minimal_document();
        doc["cast"][0]["actorId"] = json!(5);

        assert!(FixtureCatalog::from_json(&doc.to_string()).is_err());
    }

    #[test]
    fn test_rejects_malformed_slot_time() {
        let mut doc = minimal_document();
        doc["dailySlots"] = json!(["ten o'clock"]);

        assert!(FixtureCatalog::from_json(&doc.to_string()).is_err());
    }

    #[test]
    fn test_rejects_showtime_in_unknown_saloon() {
        let mut doc = minimal_document();
        doc["showtimes"][0]["saloonId"] = json!(3);

        assert!(FixtureCatalog::from_json(&doc.to_string()).is_err());
    }

    #[tokio::test]
    async fn test_coming_soon_applies_premiere_date() {
        let catalog = FixtureCatalog::embedded().unwrap();

        let upcoming = catalog.coming_soon().await.unwrap();
        let ids: Vec<i64> = upcoming.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![4, 7, 8]);
        assert_eq!(
            upcoming[0].release_date,
            NaiveDate::from_ymd_opt(2026, 5, 5).unwrap()
        );

        let catalog_entry = catalog.find_movie(4).await.unwrap().unwrap();
        assert_eq!(
            catalog_entry.release_date,
            NaiveDate::from_ymd_opt(2023, 5, 5).unwrap()
        );
    }

    #[tokio::test]
    async fn test_find_movie() {
        let catalog = FixtureCatalog::embedded().unwrap();

        let movie = catalog.find_movie(1).await.unwrap().unwrap();
        assert_eq!(movie.name, "Avengers: Endgame");
        assert!(catalog.find_movie(42).await.unwrap().is_none());
    }

    #[test]
    fn test_from_file_missing_path() {
        let result = FixtureCatalog::from_file(Path::new("/nonexistent/catalog.json"));
        assert!(result.is_err());
    }
}
