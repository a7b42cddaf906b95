//! View controller for the flight search-and-booking page.
//!
//! The controller owns the page state (visible section, selected flight,
//! rendered result cards), drives the flight API, and talks to the outside
//! world only through the [`View`] and [`KeyValueStore`] traits.

pub mod controller;
pub mod error;
pub mod event;
pub mod navigator;
pub mod render;
pub mod storage;
pub mod view;

pub use controller::{AppState, ViewController};
pub use error::{FrontendError, StorageError};
pub use event::UiEvent;
pub use navigator::Navigator;
pub use render::{BookingTrigger, ConfirmationDetails, Download, FlightCard, ResultsPane};
pub use storage::{FileStore, KeyValueStore, MemoryStore, CONFIRMATION_KEY};
pub use view::View;
