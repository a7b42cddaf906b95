use skybook_core::{BookingForm, FlightSort, SearchForm};

use crate::render::BookingTrigger;

/// User interactions the controller reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SearchSubmitted {
        form: SearchForm,
        sort: Option<FlightSort>,
    },
    /// Booking trigger of a rendered result card.
    BookFlight(BookingTrigger),
    BookingSubmitted(BookingForm),
    BackToSearch,
    BackToResults,
    DownloadJson,
    DownloadPdf,
    BackToHome,
}

impl UiEvent {
    /// Id of the UI element that raises this event.
    #[must_use]
    pub fn source_id(&self) -> &'static str {
        match self {
            UiEvent::SearchSubmitted { .. } => "searchForm",
            UiEvent::BookFlight(_) => "results",
            UiEvent::BookingSubmitted(_) => "bookingForm",
            UiEvent::BackToSearch => "backToSearch",
            UiEvent::BackToResults => "backToResults",
            UiEvent::DownloadJson => "downloadJson",
            UiEvent::DownloadPdf => "downloadPdf",
            UiEvent::BackToHome => "backToHome",
        }
    }
}
