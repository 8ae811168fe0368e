//! Handler for ticket payment.

use axum::{Json, extract::State};

use crate::api::dto::booking::{TicketRequest, TicketResponse};
use crate::api::extract::JsonBody;
use crate::state::AppState;

/// Confirms a ticket purchase. No seat is reserved and nothing is charged.
///
/// # Endpoint
///
/// `POST /api/movie/payments/sendTicketDetail`
///
/// # Request Body
///
/// ```json
/// {
///   "movieTitle": "Mai",
///   "chairNumbers": ["A1", "A2"],
///   "totalPrice": 180000
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "message": "Đặt vé thành công!",
///   "ticketId": "TK1730284837",
///   "bookingDetails": {
///     "movieTitle": "Mai",
///     "seats": ["A1", "A2"],
///     "totalPrice": 180000,
///     "bookingTime": "2024-10-30 17:40:37"
///   }
/// }
/// ```
pub async fn send_ticket_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<TicketRequest>,
) -> Json<TicketResponse> {
    tracing::debug!(?payload, "Ticket details received");

    let booking = state.booking_service.book(payload.into());
    tracing::info!(
        ticket_id = %booking.ticket_id,
        movie = %booking.movie_title,
        "Ticket booked"
    );

    Json(booking.into())
}
