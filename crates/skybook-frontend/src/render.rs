//! View fragments built from API data.
//!
//! Everything here is plain data: the controller builds fragments and hands
//! them to a [`crate::View`], which decides how they look.

use chrono::{DateTime, NaiveDateTime};
use skybook_core::{display_value, BookingConfirmation, FlightId, FlightOffer, SelectedFlight};

pub const CURRENCY_GLYPH: &str = "\u{20b9}";

pub const LOADING_MESSAGE: &str = "Loading flights...";
pub const NO_FLIGHTS_MESSAGE: &str = "No flights found.";
pub const SEARCH_ERROR_MESSAGE: &str = "Error fetching flights. Please try again.";
pub const BOOKING_FAILED_MESSAGE: &str = "Booking failed. Please try again.";
pub const PDF_FAILED_MESSAGE: &str = "Failed to download PDF receipt.";

pub const JSON_RECEIPT_FILENAME: &str = "booking_receipt.json";
pub const PDF_RECEIPT_FILENAME: &str = "booking_receipt.pdf";

/// Data carried by a result card's booking action.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingTrigger {
    pub flight_id: FlightId,
    pub price: f64,
    pub flight_number: String,
}

impl BookingTrigger {
    #[must_use]
    pub fn selection(&self) -> SelectedFlight {
        SelectedFlight {
            id: self.flight_id.clone(),
            price: self.price,
            flight_number: self.flight_number.clone(),
        }
    }
}

/// One rendered search result.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightCard {
    pub airline: String,
    pub flight_number: String,
    /// `"Delhi → Mumbai"`
    pub route: String,
    pub departure: String,
    pub duration: String,
    /// Price with the currency glyph, e.g. `"₹5000"`.
    pub price: String,
    pub trigger: BookingTrigger,
}

impl FlightCard {
    #[must_use]
    pub fn from_offer(offer: &FlightOffer) -> Self {
        Self {
            airline: offer.airline.clone(),
            flight_number: offer.flight_number.clone(),
            route: format!("{} \u{2192} {}", offer.origin, offer.destination),
            departure: format_departure(&offer.departure_time),
            duration: offer
                .duration
                .as_ref()
                .map_or_else(|| "\u{2014}".to_string(), ToString::to_string),
            price: format_price(offer.dynamic_price),
            trigger: BookingTrigger {
                flight_id: offer.flight_id.clone(),
                price: offer.dynamic_price,
                flight_number: offer.flight_number.clone(),
            },
        }
    }
}

/// Contents of the `results` container.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsPane {
    Loading,
    NoFlights,
    Offers(Vec<FlightCard>),
    Error,
}

impl ResultsPane {
    #[must_use]
    pub fn from_offers(offers: &[FlightOffer]) -> Self {
        if offers.is_empty() {
            ResultsPane::NoFlights
        } else {
            ResultsPane::Offers(offers.iter().map(FlightCard::from_offer).collect())
        }
    }

    /// Text shown instead of cards, if any.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ResultsPane::Loading => Some(LOADING_MESSAGE),
            ResultsPane::NoFlights => Some(NO_FLIGHTS_MESSAGE),
            ResultsPane::Error => Some(SEARCH_ERROR_MESSAGE),
            ResultsPane::Offers(_) => None,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[FlightCard] {
        match self {
            ResultsPane::Offers(cards) => cards,
            _ => &[],
        }
    }
}

/// Contents of the `details` container on the confirmation screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationDetails {
    pub pnr: String,
    pub flight_number: String,
    pub passenger: String,
    pub price: String,
}

impl From<&BookingConfirmation> for ConfirmationDetails {
    fn from(confirmation: &BookingConfirmation) -> Self {
        Self {
            pnr: display_value(confirmation.pnr()),
            flight_number: display_value(confirmation.flight_number()),
            passenger: display_value(confirmation.passenger_name()),
            price: display_value(confirmation.price()),
        }
    }
}

/// A file offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{CURRENCY_GLYPH}{price}")
}

/// Formats an ISO timestamp as `01 Nov 2025, 10:00`. Anything unparseable is
/// shown as received.
#[must_use]
pub fn format_departure(raw: &str) -> String {
    const DISPLAY: &str = "%d %b %Y, %H:%M";
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format(DISPLAY).to_string();
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map_or_else(|_| raw.to_string(), |ts| ts.format(DISPLAY).to_string())
}
