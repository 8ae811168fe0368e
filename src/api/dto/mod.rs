//! Data Transfer Objects for API requests and responses.
//!
//! Field names follow the frontend's camelCase contract. Request DTOs accept
//! missing keys; defaults are applied by the services. Echoed request fields
//! are raw JSON values, so a number or `null` sent by the client comes back
//! unchanged.

use chrono::{DateTime, Local, NaiveTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub mod account;
pub mod admin;
pub mod booking;
pub mod comment;
pub mod health;
pub mod movie;
pub mod people;
pub mod showtime;
pub mod venue;

/// Deserializes a present key into `Some`, keeping an explicit `null` as
/// `Some(Value::Null)`. Pair with `#[serde(default)]` so an absent key is `None`.
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Formats an acknowledgement timestamp as local `YYYY-MM-DD HH:MM:SS`.
pub fn wall_clock(at: &DateTime<Local>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Formats a slot or showtime begin time as `HH:MM`.
pub fn hour_minute(at: &NaiveTime) -> String {
    at.format("%H:%M").to_string()
}
