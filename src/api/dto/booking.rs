//! DTOs for the ticket payment endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::wall_clock;
use crate::domain::entities::{Booking, TicketOrder};

/// "Ticket booked successfully!"
pub const BOOKING_MESSAGE: &str = "Đặt vé thành công!";

/// Body of `POST /api/movie/payments/sendTicketDetail`.
///
/// The payment page sends more fields than these; the rest are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    #[serde(default, deserialize_with = "super::present")]
    pub movie_title: Option<Value>,
    #[serde(default, deserialize_with = "super::present")]
    pub chair_numbers: Option<Value>,
    #[serde(default, deserialize_with = "super::present")]
    pub total_price: Option<Value>,
}

impl From<TicketRequest> for TicketOrder {
    fn from(r: TicketRequest) -> Self {
        Self {
            movie_title: r.movie_title,
            seats: r.chair_numbers,
            total_price: r.total_price,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub success: bool,
    pub message: &'static str,
    pub ticket_id: String,
    pub booking_details: BookingDetails,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub movie_title: Value,
    pub seats: Value,
    pub total_price: Value,
    pub booking_time: String,
}

impl From<Booking> for TicketResponse {
    fn from(b: Booking) -> Self {
        Self {
            success: true,
            message: BOOKING_MESSAGE,
            ticket_id: b.ticket_id,
            booking_details: BookingDetails {
                movie_title: b.movie_title,
                seats: b.seats,
                total_price: b.total_price,
                booking_time: wall_clock(&b.booked_at),
            },
        }
    }
}
