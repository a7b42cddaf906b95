//! `View` implementation that prints to a terminal.
//!
//! Downloads are written into the configured download directory under the
//! filename the controller chose.

use std::fmt::Display;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use skybook_client::BookingRecord;
use skybook_core::Section;
use skybook_frontend::render::{format_departure, format_price, CURRENCY_GLYPH};
use skybook_frontend::{ConfirmationDetails, Download, ResultsPane, View};

pub(crate) struct TerminalView<W> {
    out: W,
    download_dir: PathBuf,
}

impl<W: Write> TerminalView<W> {
    pub(crate) fn new(out: W, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            out,
            download_dir: download_dir.into(),
        }
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.out
    }

    fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }
}

/// Actions available while `section` is on screen, for the shell prompt.
pub(crate) fn section_hint(section: Section) -> &'static str {
    match section {
        Section::Search => "search [price|duration] [asc|desc] | json | pdf | quit",
        Section::Results => "book <n> | back | home | quit",
        Section::Booking => "submit | back | home | quit",
        Section::Confirmation => "json | pdf | home | quit",
    }
}

/// One-line summary of a stored booking.
pub(crate) fn booking_line(record: &BookingRecord) -> String {
    format!(
        "{}  {:<9}  flight {}  seat {}  {}  booked {}",
        record.pnr,
        record.status,
        record.flight_id,
        record.seat_number.as_deref().unwrap_or("\u{2014}"),
        format_price(record.total_price),
        format_departure(&record.booking_date),
    )
}

fn section_title(section: Section) -> &'static str {
    match section {
        Section::Search => "Search flights",
        Section::Results => "Available flights",
        Section::Booking => "Passenger details",
        Section::Confirmation => "Booking confirmed",
    }
}

impl<W: Write> View for TerminalView<W> {
    fn show_section(&mut self, visible: Option<Section>) {
        if let Some(section) = visible {
            self.line(format_args!("\n== {} ==", section_title(section)));
            self.line(format_args!("   {}", section_hint(section)));
        }
    }

    fn render_results(&mut self, pane: &ResultsPane) {
        if let Some(message) = pane.message() {
            self.line(message);
            return;
        }
        for (i, card) in pane.cards().iter().enumerate() {
            self.line(format_args!(
                "[{}] {} {}  {}",
                i + 1,
                card.airline,
                card.flight_number,
                card.route
            ));
            self.line(format_args!(
                "    departs {}  duration {}  {}",
                card.departure, card.duration, card.price
            ));
        }
    }

    fn render_confirmation(&mut self, details: &ConfirmationDetails) {
        self.line(format_args!("PNR:       {}", details.pnr));
        self.line(format_args!("Flight:    {}", details.flight_number));
        self.line(format_args!("Passenger: {}", details.passenger));
        self.line(format_args!("Price:     {CURRENCY_GLYPH}{}", details.price));
    }

    fn alert(&mut self, message: &str) {
        self.line(format_args!("! {message}"));
    }

    fn offer_download(&mut self, download: &Download) -> io::Result<()> {
        fs::create_dir_all(&self.download_dir)?;
        let path = self.download_dir.join(download.filename);
        fs::write(&path, &download.bytes)?;
        tracing::info!(path = %path.display(), mime = download.mime_type, "download saved");
        self.line(format_args!("saved {}", path.display()));
        Ok(())
    }

    fn reload(&mut self) {
        self.line("\n(page reloaded)");
    }
}
