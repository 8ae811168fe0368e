//! Showtime entities: scheduled screenings and per-venue daily slots.

use chrono::{NaiveDate, NaiveTime};

/// A scheduled screening of a movie at a saloon.
#[derive(Debug, Clone, PartialEq)]
pub struct Showtime {
    pub id: i64,
    pub movie_id: i64,
    pub saloon_id: i64,
    pub date: NaiveDate,
    pub begin_time: NaiveTime,
}

/// A scheduled screening joined with the name of its saloon.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowtimeListing {
    pub showtime: Showtime,
    pub saloon_name: String,
}

/// A daily slot offered by a saloon for a movie.
///
/// Slots are not stored; they are derived from the catalog's daily slot
/// template for whichever saloon and movie the client asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySlot {
    pub begin_time: NaiveTime,
    pub saloon_id: i64,
    pub movie_id: i64,
}
