//! Ticket booking entities.

use chrono::{DateTime, Local};
use serde_json::Value;

/// A ticket order as submitted by the payment page.
///
/// Every field keeps whatever JSON the page sent, `null` included; the mock
/// never interprets them. `None` means the key was absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TicketOrder {
    pub movie_title: Option<Value>,
    pub seats: Option<Value>,
    pub total_price: Option<Value>,
}

/// Confirmation of a mock booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub ticket_id: String,
    pub movie_title: Value,
    pub seats: Value,
    pub total_price: Value,
    pub booked_at: DateTime<Local>,
}
