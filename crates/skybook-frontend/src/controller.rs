//! The view controller: one handler per UI event.
//!
//! Handlers deal with validation and API failures themselves (a notice or an
//! inline message, plus a log line) and leave the page interactive. Only
//! failures with no user-facing handling, such as exporting when nothing was
//! stored, come back as `Err` from [`ViewController::dispatch`].

use skybook_client::FlightApiClient;
use skybook_core::{
    BookingConfirmation, BookingForm, BookingRequest, FlightSort, Navigation, SearchForm,
    Section, SelectedFlight, ValidationError,
};

use crate::error::FrontendError;
use crate::event::UiEvent;
use crate::navigator::Navigator;
use crate::render::{
    BookingTrigger, ConfirmationDetails, Download, FlightCard, ResultsPane,
    BOOKING_FAILED_MESSAGE, JSON_RECEIPT_FILENAME, PDF_FAILED_MESSAGE, PDF_RECEIPT_FILENAME,
};
use crate::storage::{load_confirmation, save_confirmation, KeyValueStore};
use crate::view::View;

/// In-memory page state. Discarded on reload; persisted storage is not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub section: Section,
    pub selected: Option<SelectedFlight>,
}

impl AppState {
    /// State of a page currently showing `section` with nothing selected.
    #[must_use]
    pub fn at(section: Section) -> Self {
        Self {
            section,
            selected: None,
        }
    }
}

pub struct ViewController<V, S> {
    api: FlightApiClient,
    view: V,
    store: S,
    navigator: Navigator,
    state: AppState,
    results: ResultsPane,
}

impl<V: View, S: KeyValueStore> ViewController<V, S> {
    /// Mounts the controller on a fresh page showing the search section.
    pub fn mount(api: FlightApiClient, view: V, store: S) -> Self {
        Self::mount_with_state(api, view, store, AppState::default())
    }

    /// Mounts the controller with an explicit starting state.
    pub fn mount_with_state(api: FlightApiClient, view: V, store: S, state: AppState) -> Self {
        let mut controller = Self {
            api,
            view,
            store,
            navigator: Navigator::new(),
            state,
            results: ResultsPane::NoFlights,
        };
        let section = controller.state.section;
        controller.reveal(section);
        controller
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current contents of the results container.
    #[must_use]
    pub fn results(&self) -> &ResultsPane {
        &self.results
    }

    /// Card at `index` in the results container, if rendered.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&FlightCard> {
        self.results.cards().get(index)
    }

    /// Routes a UI event to its handler.
    ///
    /// # Errors
    ///
    /// Returns [`FrontendError`] only for failures no handler surfaces to the
    /// user; see the module docs.
    pub async fn dispatch(&mut self, event: UiEvent) -> Result<(), FrontendError> {
        tracing::debug!(source = event.source_id(), "ui event");
        match event {
            UiEvent::SearchSubmitted { form, sort } => {
                self.submit_search(&form, sort).await;
                Ok(())
            }
            UiEvent::BookFlight(trigger) => {
                self.select_flight(&trigger);
                Ok(())
            }
            UiEvent::BookingSubmitted(form) => self.submit_booking(&form).await,
            UiEvent::BackToSearch => {
                self.navigate(Navigation::BackToSearch);
                Ok(())
            }
            UiEvent::BackToResults => {
                self.navigate(Navigation::BackToResults);
                Ok(())
            }
            UiEvent::DownloadJson => self.download_json(),
            UiEvent::DownloadPdf => {
                self.download_pdf().await;
                Ok(())
            }
            UiEvent::BackToHome => {
                self.back_to_home();
                Ok(())
            }
        }
    }

    /// Validates the search form, shows the results section with a loading
    /// placeholder, then renders whatever the search endpoint returns.
    pub async fn submit_search(&mut self, form: &SearchForm, sort: Option<FlightSort>) {
        if !self.allows(Navigation::SearchSubmitted) {
            return;
        }
        let criteria = match form.validate() {
            Ok(criteria) => criteria,
            Err(e) => {
                self.view.alert(&e.to_string());
                return;
            }
        };

        self.navigate(Navigation::SearchSubmitted);
        self.set_results(ResultsPane::Loading);

        let pane = match self.api.search_flights(&criteria, sort).await {
            Ok(offers) => {
                tracing::info!(count = offers.len(), "flight search completed");
                ResultsPane::from_offers(&offers)
            }
            Err(e) => {
                tracing::error!(error = %e, "flight search failed");
                ResultsPane::Error
            }
        };
        self.set_results(pane);
    }

    /// Records the card's flight as the selection and opens the booking form.
    pub fn select_flight(&mut self, trigger: &BookingTrigger) {
        if !self.allows(Navigation::FlightChosen) {
            return;
        }
        self.state.selected = Some(trigger.selection());
        tracing::info!(
            flight_id = %trigger.flight_id,
            flight_number = %trigger.flight_number,
            "flight selected"
        );
        self.navigate(Navigation::FlightChosen);
    }

    /// Books the selected flight and, on success, stores the confirmation and
    /// shows it.
    ///
    /// With no selection the user is told to pick a flight and sent back to
    /// the search screen, whichever section was showing. A failed booking
    /// keeps the selection so the form can be resubmitted.
    ///
    /// # Errors
    ///
    /// Returns [`FrontendError::Storage`] if the confirmation cannot be
    /// stored.
    pub async fn submit_booking(&mut self, form: &BookingForm) -> Result<(), FrontendError> {
        let Some(flight) = self.state.selected.clone() else {
            self.view.alert(&ValidationError::NoFlightSelected.to_string());
            self.navigate(Navigation::SelectionMissing);
            return Ok(());
        };
        // A kept selection does not put the booking form back on screen.
        if !self.allows(Navigation::BookingConfirmed) {
            return Ok(());
        }

        let passenger = form.passenger();
        let confirmation = match self
            .api
            .book(&BookingRequest::new(&flight, &passenger))
            .await
        {
            Ok(confirmation) => confirmation,
            Err(e) => {
                tracing::error!(error = %e, flight_id = %flight.id, "booking failed");
                self.view.alert(BOOKING_FAILED_MESSAGE);
                return Ok(());
            }
        };

        save_confirmation(&mut self.store, &confirmation)?;
        self.show_confirmation(&confirmation);
        Ok(())
    }

    /// Reveals the confirmation section and renders `confirmation` into it,
    /// from whichever section is showing.
    pub fn show_confirmation(&mut self, confirmation: &BookingConfirmation) {
        self.enter(Section::Confirmation);
        self.view
            .render_confirmation(&ConfirmationDetails::from(confirmation));
    }

    /// Offers the stored confirmation as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// - [`FrontendError::NothingPersisted`] if no booking was ever stored.
    /// - [`FrontendError::StoredConfirmation`] if the stored value is corrupt.
    /// - [`FrontendError::Download`] if the view cannot deliver the file.
    pub fn download_json(&mut self) -> Result<(), FrontendError> {
        let confirmation = load_confirmation(&self.store)?;
        let body = serde_json::to_string_pretty(&confirmation)
            .map_err(FrontendError::StoredConfirmation)?;
        let download = Download {
            filename: JSON_RECEIPT_FILENAME,
            mime_type: "application/json",
            bytes: body.into_bytes(),
        };
        self.view
            .offer_download(&download)
            .map_err(|source| FrontendError::Download {
                filename: JSON_RECEIPT_FILENAME.to_owned(),
                source,
            })
    }

    /// Asks the backend to render the stored confirmation as a PDF and offers
    /// the result. Every failure ends in the same generic notice.
    pub async fn download_pdf(&mut self) {
        if let Err(e) = self.try_download_pdf().await {
            tracing::error!(error = %e, "PDF receipt download failed");
            self.view.alert(PDF_FAILED_MESSAGE);
        }
    }

    async fn try_download_pdf(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let confirmation = load_confirmation(&self.store)?;
        let bytes = self.api.receipt_pdf(&confirmation).await?;
        let download = Download {
            filename: PDF_RECEIPT_FILENAME,
            mime_type: "application/pdf",
            bytes,
        };
        self.view.offer_download(&download)?;
        Ok(())
    }

    /// Full reload: the view reloads and all in-memory state is dropped.
    /// Stored data survives.
    pub fn back_to_home(&mut self) {
        self.view.reload();
        self.state = AppState::default();
        self.results = ResultsPane::NoFlights;
        self.navigator = Navigator::new();
        self.reveal(Section::Search);
    }

    fn allows(&self, event: Navigation) -> bool {
        let allowed = self.state.section.transition(event).is_some();
        if !allowed {
            tracing::warn!(
                section = %self.state.section,
                ?event,
                "event not available from the current section; ignoring"
            );
        }
        allowed
    }

    /// Applies `event` to the section state machine and updates visibility.
    /// Events not valid from the current section are logged and dropped.
    fn navigate(&mut self, event: Navigation) {
        match self.state.section.transition(event) {
            Some(next) => self.enter(next),
            None => tracing::warn!(
                section = %self.state.section,
                ?event,
                "event not available from the current section; ignoring"
            ),
        }
    }

    fn enter(&mut self, next: Section) {
        tracing::info!(from = %self.state.section, to = %next, "section change");
        self.state.section = next;
        self.reveal(next);
    }

    fn reveal(&mut self, section: Section) {
        let visible = self.navigator.show_section(section.dom_id());
        self.view.show_section(visible);
    }

    fn set_results(&mut self, pane: ResultsPane) {
        self.view.render_results(&pane);
        self.results = pane;
    }
}
