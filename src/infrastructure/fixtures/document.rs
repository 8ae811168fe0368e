//! Serialized form of the fixture document.
//!
//! Records mirror `fixtures/catalog.json` field for field. They are converted
//! into domain entities by [`super::FixtureCatalog::from_document`].

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureDocument {
    pub movies: Vec<MovieRecord>,
    pub coming_soon: Vec<ComingSoonRecord>,
    pub cities: Vec<NamedRecord>,
    pub saloons: Vec<SaloonRecord>,
    pub comments: Vec<CommentRecord>,
    pub comment_count: u64,
    pub showtimes: Vec<ShowtimeRecord>,
    /// `HH:MM` strings.
    pub daily_slots: Vec<String>,
    pub actors: Vec<NamedRecord>,
    pub cast: Vec<CastRecord>,
    pub categories: Vec<NamedRecord>,
    pub directors: Vec<NamedRecord>,
    pub screening_city_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: i64,
    pub name: String,
    pub poster_url: String,
    pub description: String,
    pub trailer_url: String,
    pub director: String,
    pub release_date: NaiveDate,
    pub duration: u32,
    pub category: String,
    pub rating: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComingSoonRecord {
    pub movie_id: i64,
    #[serde(default)]
    pub premiere_date: Option<NaiveDate>,
}

/// Any `{id, name}` record: cities, actors, categories, directors.
#[derive(Debug, Deserialize)]
pub struct NamedRecord {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaloonRecord {
    pub id: i64,
    pub name: String,
    pub city_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub id: i64,
    pub content: String,
    pub author: String,
    pub created_at: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowtimeRecord {
    pub id: i64,
    pub movie_id: i64,
    pub saloon_id: i64,
    pub date: NaiveDate,
    /// `HH:MM`.
    pub begin_time: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastRecord {
    pub actor_id: i64,
    pub character: String,
}
