//! Movie entity representing a catalog title.

use chrono::NaiveDate;

/// A movie in the mock catalog.
///
/// Movies are loaded once from the fixture document and never mutated.
/// The frontend reads most attributes under two names; that duplication is a
/// presentation concern handled by [`crate::api::dto::movie::MovieResponse`].
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub poster_url: String,
    pub description: String,
    pub trailer_url: String,
    pub director: String,
    pub release_date: NaiveDate,
    /// Running time in minutes.
    pub duration: u32,
    pub category: String,
    pub rating: f64,
}

impl Movie {
    /// Returns a copy of the movie advertised with a different release date.
    ///
    /// Used for "coming soon" listings where the premiere date shown to users
    /// differs from the catalog release date.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let premiere = NaiveDate::from_ymd_opt(2026, 5, 5).unwrap();
    /// let upcoming = movie.with_release_date(premiere);
    /// ```
    pub fn with_release_date(&self, release_date: NaiveDate) -> Self {
        Self {
            release_date,
            ..self.clone()
        }
    }
}

/// A "coming soon" listing entry.
///
/// References a catalog movie and optionally overrides its release date.
#[derive(Debug, Clone, PartialEq)]
pub struct ComingSoonEntry {
    pub movie_id: i64,
    pub premiere_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie() -> Movie {
        Movie {
            id: 4,
            name: "Guardians of the Galaxy Vol. 3".to_string(),
            poster_url: "https://image.example/poster.jpg".to_string(),
            description: "Peter Quill rallies his team.".to_string(),
            trailer_url: "https://video.example/embed/1".to_string(),
            director: "James Gunn".to_string(),
            release_date: NaiveDate::from_ymd_opt(2023, 5, 5).unwrap(),
            duration: 150,
            category: "Action, Adventure, Comedy".to_string(),
            rating: 8.0,
        }
    }

    #[test]
    fn test_with_release_date_overrides_only_date() {
        let movie = sample_movie();
        let premiere = NaiveDate::from_ymd_opt(2026, 5, 5).unwrap();

        let upcoming = movie.with_release_date(premiere);

        assert_eq!(upcoming.release_date, premiere);
        assert_eq!(upcoming.id, movie.id);
        assert_eq!(upcoming.name, movie.name);
        assert_eq!(movie.release_date, NaiveDate::from_ymd_opt(2023, 5, 5).unwrap());
    }
}
