//! HTTP client for the flight booking API.
//!
//! Wraps `reqwest` with typed request and response bodies for the three
//! endpoints the front end drives (search, book, receipt), the booking
//! management endpoints under `/db`, the full flight listing and the health
//! check. Every call is single-shot: no retry, no backoff, and no timeout
//! unless one is configured.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use skybook_core::{
    AppConfig, BookingConfirmation, BookingRequest, FlightOffer, FlightSort, SearchCriteria,
};

use crate::error::FlightApiError;
use crate::types::{BookingRecord, CancellationNotice, ErrorDetail, HealthStatus};

const DEFAULT_USER_AGENT: &str = "skybook/0.1 (flight-booking)";

/// Page size the backend applies to `GET /db/bookings` when none is given.
pub const DEFAULT_BOOKINGS_LIMIT: u32 = 100;

/// Client for the flight booking REST API.
///
/// Use [`FlightApiClient::from_config`] in the binary or
/// [`FlightApiClient::new`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct FlightApiClient {
    client: Client,
    base_url: Url,
}

impl FlightApiClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// `timeout_secs` of `None` leaves requests without any timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FlightApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FlightApiError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(
        base_url: &str,
        timeout_secs: Option<u64>,
        user_agent: &str,
    ) -> Result<Self, FlightApiError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        // Exactly one trailing slash so that `Url::join` appends endpoint
        // paths instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| FlightApiError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`FlightApiClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, FlightApiError> {
        let user_agent = if config.user_agent.is_empty() {
            DEFAULT_USER_AGENT
        } else {
            &config.user_agent
        };
        Self::new(&config.api_base_url, config.request_timeout_secs, user_agent)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Searches for flights matching `criteria`.
    ///
    /// Sends `origin`, `destination` and `date` as query parameters, plus
    /// `sort_by`/`order` only when `sort` is given. The backend answers an
    /// unmatched search with 404, which is returned here as an empty list.
    ///
    /// # Errors
    ///
    /// - [`FlightApiError::Http`] on network failure.
    /// - [`FlightApiError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`FlightApiError::Deserialize`] if the body is not a list of offers.
    pub async fn search_flights(
        &self,
        criteria: &SearchCriteria,
        sort: Option<FlightSort>,
    ) -> Result<Vec<FlightOffer>, FlightApiError> {
        let url = self.search_url(criteria, sort);
        tracing::info!(
            origin = %criteria.origin,
            destination = %criteria.destination,
            date = %criteria.date,
            "searching flights"
        );

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(%url, "search returned 404; treating as no flights");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(FlightApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FlightApiError::Deserialize {
            context: "GET flights/search".to_owned(),
            source: e,
        })
    }

    /// Books the selected flight for a passenger.
    ///
    /// # Errors
    ///
    /// - [`FlightApiError::Http`] on network failure.
    /// - [`FlightApiError::BookingFailed`] on any non-2xx status.
    /// - [`FlightApiError::Deserialize`] if the body is not a JSON object.
    pub async fn book(
        &self,
        request: &BookingRequest<'_>,
    ) -> Result<BookingConfirmation, FlightApiError> {
        let url = self.endpoint("book")?;
        tracing::info!(flight_id = %request.flight_id, "submitting booking");

        let response = self.client.post(url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FlightApiError::BookingFailed {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FlightApiError::Deserialize {
            context: "POST book".to_owned(),
            source: e,
        })
    }

    /// Fetches a PDF receipt rendered by the backend for `confirmation`.
    ///
    /// # Errors
    ///
    /// - [`FlightApiError::Http`] on network failure.
    /// - [`FlightApiError::UnexpectedStatus`] on any non-2xx status.
    pub async fn receipt_pdf(
        &self,
        confirmation: &BookingConfirmation,
    ) -> Result<Vec<u8>, FlightApiError> {
        let url = self.endpoint("receipt/pdf")?;
        tracing::info!("requesting PDF receipt");

        let response = self.client.post(url.clone()).json(confirmation).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FlightApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Calls `GET /health`.
    ///
    /// # Errors
    ///
    /// - [`FlightApiError::Http`] on network failure.
    /// - [`FlightApiError::UnexpectedStatus`] on any non-2xx status.
    /// - [`FlightApiError::Deserialize`] if the body does not match.
    pub async fn health(&self) -> Result<HealthStatus, FlightApiError> {
        let url = self.endpoint("health")?;
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FlightApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FlightApiError::Deserialize {
            context: "GET health".to_owned(),
            source: e,
        })
    }

    /// Lists every flight the backend knows about, optionally sorted.
    ///
    /// # Errors
    ///
    /// - [`FlightApiError::Http`] on network failure.
    /// - [`FlightApiError::UnexpectedStatus`] on any non-2xx status.
    /// - [`FlightApiError::Deserialize`] if the body is not a list of offers.
    pub async fn list_flights(
        &self,
        sort: Option<FlightSort>,
    ) -> Result<Vec<FlightOffer>, FlightApiError> {
        let mut url = self.endpoint("flights")?;
        if let Some(sort) = sort {
            url.query_pairs_mut()
                .append_pair("sort_by", sort.key.as_str())
                .append_pair("order", sort.order.as_str());
        }
        tracing::info!("listing all flights");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FlightApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FlightApiError::Deserialize {
            context: "GET flights".to_owned(),
            source: e,
        })
    }

    /// Looks up a booking by PNR.
    ///
    /// # Errors
    ///
    /// - [`FlightApiError::Http`] on network failure.
    /// - [`FlightApiError::BookingNotFound`] on 404.
    /// - [`FlightApiError::Rejected`] or [`FlightApiError::UnexpectedStatus`]
    ///   on any other non-2xx status.
    /// - [`FlightApiError::Deserialize`] if the body does not match.
    pub async fn booking(&self, pnr: &str) -> Result<BookingRecord, FlightApiError> {
        let url = self.booking_url(pnr)?;
        tracing::info!(pnr, "looking up booking");

        let response = self.client.get(url.clone()).send().await?;
        let body = Self::pnr_response(response, pnr, &url).await?;
        serde_json::from_str(&body).map_err(|e| FlightApiError::Deserialize {
            context: format!("GET db/booking/{pnr}"),
            source: e,
        })
    }

    /// Cancels the booking stored under `pnr`.
    ///
    /// # Errors
    ///
    /// - [`FlightApiError::Http`] on network failure.
    /// - [`FlightApiError::BookingNotFound`] on 404.
    /// - [`FlightApiError::Rejected`] when the backend refuses, for example
    ///   because the booking is already cancelled.
    /// - [`FlightApiError::Deserialize`] if the body does not match.
    pub async fn cancel_booking(&self, pnr: &str) -> Result<CancellationNotice, FlightApiError> {
        let url = self.booking_url(pnr)?;
        tracing::info!(pnr, "cancelling booking");

        let response = self.client.delete(url.clone()).send().await?;
        let body = Self::pnr_response(response, pnr, &url).await?;
        serde_json::from_str(&body).map_err(|e| FlightApiError::Deserialize {
            context: format!("DELETE db/booking/{pnr}"),
            source: e,
        })
    }

    /// Lists the most recent bookings, newest first.
    ///
    /// # Errors
    ///
    /// - [`FlightApiError::Http`] on network failure.
    /// - [`FlightApiError::UnexpectedStatus`] on any non-2xx status.
    /// - [`FlightApiError::Deserialize`] if the body is not a list of bookings.
    pub async fn list_bookings(&self, limit: u32) -> Result<Vec<BookingRecord>, FlightApiError> {
        let mut url = self.endpoint("db/bookings")?;
        url.query_pairs_mut().append_pair("limit", &limit.to_string());

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FlightApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FlightApiError::Deserialize {
            context: "GET db/bookings".to_owned(),
            source: e,
        })
    }

    /// Reads the body of a `/db/booking/{pnr}` answer, mapping 404 and any
    /// `detail` error body to typed errors.
    async fn pnr_response(
        response: reqwest::Response,
        pnr: &str,
        url: &Url,
    ) -> Result<String, FlightApiError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FlightApiError::BookingNotFound {
                pnr: pnr.to_owned(),
            });
        }
        let body = response.text().await?;
        if status.is_success() {
            return Ok(body);
        }
        match serde_json::from_str::<ErrorDetail>(&body) {
            Ok(ErrorDetail { detail }) => Err(FlightApiError::Rejected {
                status: status.as_u16(),
                detail,
            }),
            Err(_) => Err(FlightApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            }),
        }
    }

    /// `db/booking/{pnr}` with the PNR as one percent-encoded path segment.
    fn booking_url(&self, pnr: &str) -> Result<Url, FlightApiError> {
        let mut url = self.endpoint("db/booking")?;
        url.path_segments_mut()
            .map_err(|()| FlightApiError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_owned(),
            })?
            .push(pnr);
        Ok(url)
    }

    /// Builds the search URL with percent-encoded query parameters.
    fn search_url(&self, criteria: &SearchCriteria, sort: Option<FlightSort>) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("{}flights/search", self.base_url.path()));
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("origin", &criteria.origin);
            pairs.append_pair("destination", &criteria.destination);
            pairs.append_pair("date", &criteria.date);
            if let Some(sort) = sort {
                pairs.append_pair("sort_by", sort.key.as_str());
                pairs.append_pair("order", sort.order.as_str());
            }
        }
        url
    }

    fn endpoint(&self, path: &str) -> Result<Url, FlightApiError> {
        self.base_url
            .join(path)
            .map_err(|e| FlightApiError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
