use thiserror::Error;

/// Errors returned by the flight API client.
#[derive(Debug, Error)]
pub enum FlightApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base address is not a usable URL.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// `POST /book` answered with a non-2xx status. The body carries no
    /// error contract, so only the status is kept.
    #[error("booking failed with HTTP status {status}")]
    BookingFailed { status: u16 },

    /// No booking exists under this PNR.
    #[error("booking {pnr} not found")]
    BookingNotFound { pnr: String },

    /// The backend refused the request and said why in its `detail` field.
    #[error("request rejected with HTTP status {status}: {detail}")]
    Rejected { status: u16, detail: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
