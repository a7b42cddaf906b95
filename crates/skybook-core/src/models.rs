//! Data model shared by the flight API client and the view controller.
//!
//! Field names follow the JSON emitted and accepted by the booking backend.
//! Where the backend spells a field differently from the front end
//! (`source` vs `origin`, `duration_minutes` vs `duration`) both are accepted.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Validated search input. Built per submission and never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub origin: String,
    pub destination: String,
    /// ISO date, `YYYY-MM-DD`. Passed through to the backend unparsed.
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Duration,
}

impl SortKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Duration => "duration",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Optional server-side ordering for a search. Never sent unless requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightSort {
    pub key: SortKey,
    pub order: SortOrder,
}

// ---------------------------------------------------------------------------
// Offers
// ---------------------------------------------------------------------------

/// Backend flight identifier.
///
/// The search endpoint returns integer ids, but nothing in the front end
/// depends on that, so string ids are accepted as well. The id is echoed back
/// to the booking endpoint in the JSON type it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlightId {
    Number(i64),
    Text(String),
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightId::Number(n) => write!(f, "{n}"),
            FlightId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for FlightId {
    type Err = Infallible;

    /// Integers become [`FlightId::Number`]; anything else is kept as text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(trimmed
            .parse::<i64>()
            .map_or_else(|_| FlightId::Text(trimmed.to_owned()), FlightId::Number))
    }
}

impl From<i64> for FlightId {
    fn from(n: i64) -> Self {
        FlightId::Number(n)
    }
}

impl From<&str> for FlightId {
    fn from(s: &str) -> Self {
        FlightId::Text(s.to_owned())
    }
}

/// Flight duration as reported by the backend: whole minutes, or a
/// preformatted label such as `"2h 10m"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlightDuration {
    Minutes(u64),
    Label(String),
}

impl fmt::Display for FlightDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightDuration::Minutes(total) => {
                let (hours, minutes) = (total / 60, total % 60);
                if hours == 0 {
                    write!(f, "{minutes}m")
                } else {
                    write!(f, "{hours}h {minutes}m")
                }
            }
            FlightDuration::Label(label) => f.write_str(label),
        }
    }
}

/// A single bookable flight returned by `GET /flights/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub flight_id: FlightId,
    pub flight_number: String,
    pub airline: String,
    #[serde(alias = "source")]
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    #[serde(default, alias = "duration_minutes")]
    pub duration: Option<FlightDuration>,
    pub dynamic_price: f64,
}

/// The flight the user picked from the results list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFlight {
    pub id: FlightId,
    pub price: f64,
    pub flight_number: String,
}

impl From<&FlightOffer> for SelectedFlight {
    fn from(offer: &FlightOffer) -> Self {
        Self {
            id: offer.flight_id.clone(),
            price: offer.dynamic_price,
            flight_number: offer.flight_number.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Booking
// ---------------------------------------------------------------------------

/// Passenger details as typed into the booking form.
///
/// `age` is `None` when the form value had no leading integer; it is sent to
/// the backend as `null` in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerInfo {
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
}

/// Body of `POST /book`.
#[derive(Debug, Serialize)]
pub struct BookingRequest<'a> {
    pub flight_id: &'a FlightId,
    pub passenger: &'a PassengerInfo,
    pub price: f64,
}

impl<'a> BookingRequest<'a> {
    #[must_use]
    pub fn new(flight: &'a SelectedFlight, passenger: &'a PassengerInfo) -> Self {
        Self {
            flight_id: &flight.id,
            passenger,
            price: flight.price,
        }
    }
}

/// Booking result returned by `POST /book`.
///
/// Kept as the raw JSON object so it can be stored and exported verbatim,
/// including fields this crate does not know about and the key order the
/// API sent (`serde_json` is built with `preserve_order`). Typed accessors
/// cover the fields the confirmation screen shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingConfirmation(Map<String, Value>);

impl BookingConfirmation {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    #[must_use]
    pub fn pnr(&self) -> Option<&Value> {
        self.0.get("pnr")
    }

    #[must_use]
    pub fn flight_number(&self) -> Option<&Value> {
        self.0.get("flight_number")
    }

    #[must_use]
    pub fn passenger_name(&self) -> Option<&Value> {
        self.0.get("passenger").and_then(|p| p.get("name"))
    }

    #[must_use]
    pub fn price(&self) -> Option<&Value> {
        self.0.get("price")
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Renders a JSON scalar the way the confirmation screen shows it.
///
/// Strings appear without quotes, numbers in their shortest form, and a
/// missing or `null` value as an em dash.
#[must_use]
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "\u{2014}".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn flight_offer_accepts_backend_field_names() {
        let offer: FlightOffer = serde_json::from_value(json!({
            "flight_id": 1,
            "airline": "IndiGo",
            "flight_number": "6E203",
            "source": "Delhi",
            "destination": "Mumbai",
            "departure_time": "2025-11-01T10:00:00",
            "arrival_time": "2025-11-01T12:00:00",
            "duration_minutes": 120,
            "dynamic_price": 5200.5,
            "pricing_tier": "standard"
        }))
        .expect("backend offer should deserialize");

        assert_eq!(offer.flight_id, FlightId::Number(1));
        assert_eq!(offer.origin, "Delhi");
        assert_eq!(offer.duration, Some(FlightDuration::Minutes(120)));
    }

    #[test]
    fn flight_offer_accepts_front_end_field_names() {
        let offer: FlightOffer = serde_json::from_value(json!({
            "flight_id": "F1",
            "airline": "Air India",
            "flight_number": "AI101",
            "origin": "Delhi",
            "destination": "Chennai",
            "departure_time": "2025-11-01T10:00:00",
            "duration": "2h 45m",
            "dynamic_price": 5000
        }))
        .expect("front-end offer should deserialize");

        assert_eq!(offer.flight_id, FlightId::Text("F1".to_owned()));
        assert_eq!(
            offer.duration,
            Some(FlightDuration::Label("2h 45m".to_owned()))
        );
        assert!((offer.dynamic_price - 5000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flight_id_from_str_prefers_integers() {
        assert_eq!("42".parse::<FlightId>().unwrap(), FlightId::Number(42));
        assert_eq!(
            "F1".parse::<FlightId>().unwrap(),
            FlightId::Text("F1".to_owned())
        );
    }

    #[test]
    fn duration_minutes_display() {
        assert_eq!(FlightDuration::Minutes(125).to_string(), "2h 5m");
        assert_eq!(FlightDuration::Minutes(45).to_string(), "45m");
    }

    #[test]
    fn booking_request_echoes_flight_id_type() {
        let flight = SelectedFlight {
            id: FlightId::Number(3),
            price: 4100.0,
            flight_number: "SJ789".to_owned(),
        };
        let passenger = PassengerInfo {
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            age: None,
        };
        let body = serde_json::to_value(BookingRequest::new(&flight, &passenger)).unwrap();
        assert_eq!(
            body,
            json!({
                "flight_id": 3,
                "passenger": { "name": "Asha", "email": "asha@example.com", "age": null },
                "price": 4100.0
            })
        );
    }

    #[test]
    fn confirmation_keeps_unknown_fields() {
        let raw = json!({
            "pnr": "X1",
            "flight_number": "AI101",
            "passenger": { "name": "A" },
            "price": 5000,
            "seat": "12C"
        });
        let confirmation: BookingConfirmation = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(display_value(confirmation.pnr()), "X1");
        assert_eq!(display_value(confirmation.passenger_name()), "A");
        assert_eq!(display_value(confirmation.price()), "5000");
        assert_eq!(confirmation.into_value(), raw);
    }

    #[test]
    fn confirmation_reserializes_in_api_key_order() {
        let raw = r#"{"pnr":"X1","seat":"12C","flight_number":"AI101","passenger":{"name":"A","age":30},"price":5000}"#;
        let confirmation: BookingConfirmation = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&confirmation).unwrap(), raw);
    }

    #[test]
    fn display_value_missing_is_em_dash() {
        assert_eq!(display_value(None), "\u{2014}");
        assert_eq!(display_value(Some(&Value::Null)), "\u{2014}");
    }
}
