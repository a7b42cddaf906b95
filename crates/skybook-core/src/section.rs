//! Screen state machine.
//!
//! The page shows exactly one section at a time. [`Section::transition`] is
//! the single place that decides which section follows a navigation event;
//! a `None` result means the event is not valid from the current section.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Search,
    Results,
    Booking,
    Confirmation,
}

/// Events that move the page between sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The search form passed validation.
    SearchSubmitted,
    /// A result card's booking trigger was used.
    FlightChosen,
    /// The booking form was submitted from the booking screen.
    BookingConfirmed,
    /// `backToSearch` on the results screen.
    BackToSearch,
    /// `backToResults` on the booking screen.
    BackToResults,
    /// The booking form was submitted with no flight selected. Valid from
    /// every section.
    SelectionMissing,
    /// Full page reload (`backToHome`).
    Reload,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Search,
        Section::Results,
        Section::Booking,
        Section::Confirmation,
    ];

    /// Container id of this section in the UI contract.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Section::Search => "search-section",
            Section::Results => "results-section",
            Section::Booking => "booking-section",
            Section::Confirmation => "confirmation-section",
        }
    }

    #[must_use]
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.dom_id() == id)
    }

    /// Returns the section that follows `event`, or `None` when the event
    /// would skip a step or does not apply here.
    #[must_use]
    pub fn transition(self, event: Navigation) -> Option<Section> {
        match (self, event) {
            (_, Navigation::Reload | Navigation::SelectionMissing) => Some(Section::Search),
            (Section::Search, Navigation::SearchSubmitted)
            | (Section::Booking, Navigation::BackToResults) => Some(Section::Results),
            (Section::Results, Navigation::FlightChosen) => Some(Section::Booking),
            (Section::Booking, Navigation::BookingConfirmed) => Some(Section::Confirmation),
            (Section::Results, Navigation::BackToSearch) => Some(Section::Search),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}
