//! Response types for endpoints that only the client cares about.
//!
//! Offers and confirmations live in `skybook-core` because the view
//! controller renders and stores them.

use serde::Deserialize;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub server_time: Option<String>,
}

impl HealthStatus {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// A stored booking as returned by `GET /db/booking/{pnr}` and
/// `GET /db/bookings`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingRecord {
    pub booking_id: i64,
    pub pnr: String,
    pub flight_id: i64,
    pub passenger_id: i64,
    #[serde(default)]
    pub seat_number: Option<String>,
    pub price_per_seat: f64,
    pub total_price: f64,
    pub status: String,
    pub booking_date: String,
}

impl BookingRecord {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status.eq_ignore_ascii_case("cancelled")
    }
}

/// Body of `DELETE /db/booking/{pnr}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CancellationNotice {
    pub message: String,
    pub pnr: String,
}

/// Error body the backend sends with 4xx/5xx answers.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub(crate) detail: String,
}
