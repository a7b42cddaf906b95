pub mod client;
pub mod error;
pub mod types;

pub use client::FlightApiClient;
pub use error::FlightApiError;
pub use types::{BookingRecord, CancellationNotice, HealthStatus};
