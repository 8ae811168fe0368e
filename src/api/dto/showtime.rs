//! DTOs for showtime ("saloon time") endpoints.

use chrono::NaiveDate;
use serde::Serialize;

use super::hour_minute;
use crate::domain::entities::{DailySlot, ShowtimeListing};

/// A scheduled screening with its saloon embedded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowtimeItem {
    pub id: i64,
    pub movie_begin_time: String,
    pub movie_date: NaiveDate,
    pub movie_id: i64,
    pub saloon_id: i64,
    pub saloon: SaloonRef,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaloonRef {
    pub saloon_name: String,
}

impl From<ShowtimeListing> for ShowtimeItem {
    fn from(listing: ShowtimeListing) -> Self {
        let s = listing.showtime;
        Self {
            id: s.id,
            movie_begin_time: hour_minute(&s.begin_time),
            movie_date: s.date,
            movie_id: s.movie_id,
            saloon_id: s.saloon_id,
            saloon: SaloonRef {
                saloon_name: listing.saloon_name,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySlotItem {
    pub movie_begin_time: String,
    pub saloon_id: i64,
    pub movie_id: i64,
}

impl From<DailySlot> for DailySlotItem {
    fn from(slot: DailySlot) -> Self {
        Self {
            movie_begin_time: hour_minute(&slot.begin_time),
            saloon_id: slot.saloon_id,
            movie_id: slot.movie_id,
        }
    }
}
