pub mod app_config;
pub mod config;
pub mod models;
pub mod section;
pub mod validate;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use models::{
    display_value, BookingConfirmation, BookingRequest, FlightDuration, FlightId, FlightOffer,
    FlightSort, PassengerInfo, SearchCriteria, SelectedFlight, SortKey, SortOrder,
};
pub use section::{Navigation, Section};
pub use validate::{parse_age, BookingForm, SearchForm, ValidationError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
