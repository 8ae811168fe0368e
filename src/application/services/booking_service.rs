//! Ticket booking service.

use crate::domain::clock::Clock;
use crate::domain::entities::{Booking, TicketOrder};
use serde_json::{Value, json};
use std::sync::Arc;

const UNKNOWN_MOVIE_TITLE: &str = "Unknown Movie";

/// Accepts ticket orders and issues mock confirmations.
///
/// Nothing is reserved: the order is echoed back with a ticket ID derived from
/// the current Unix time (`TK<seconds>`).
pub struct BookingService {
    clock: Arc<dyn Clock>,
}

impl BookingService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Confirms a ticket order.
    ///
    /// Absent fields default to `"Unknown Movie"`, no seats and a zero price.
    /// A field sent as `null` is echoed as `null`.
    pub fn book(&self, order: TicketOrder) -> Booking {
        let now = self.clock.now();

        Booking {
            ticket_id: format!("TK{}", now.timestamp()),
            movie_title: order.movie_title.unwrap_or_else(|| json!(UNKNOWN_MOVIE_TITLE)),
            seats: order.seats.unwrap_or_else(|| Value::Array(Vec::new())),
            total_price: order.total_price.unwrap_or_else(|| json!(0)),
            booked_at: now,
        }
    }
}
