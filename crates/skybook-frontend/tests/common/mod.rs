//! Shared fixtures for controller tests.

use std::io;

use serde_json::{json, Value};
use skybook_client::FlightApiClient;
use skybook_core::Section;
use skybook_frontend::{ConfirmationDetails, Download, MemoryStore, ResultsPane, View, ViewController};

/// `View` that records every call instead of drawing anything.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub sections: Vec<Option<Section>>,
    pub results: Vec<ResultsPane>,
    pub confirmations: Vec<ConfirmationDetails>,
    pub alerts: Vec<String>,
    pub downloads: Vec<Download>,
    pub reloads: usize,
    pub fail_downloads: bool,
}

impl RecordingView {
    pub fn visible(&self) -> Option<Section> {
        self.sections.last().copied().flatten()
    }
}

impl View for RecordingView {
    fn show_section(&mut self, visible: Option<Section>) {
        self.sections.push(visible);
    }

    fn render_results(&mut self, pane: &ResultsPane) {
        self.results.push(pane.clone());
    }

    fn render_confirmation(&mut self, details: &ConfirmationDetails) {
        self.confirmations.push(details.clone());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }

    fn offer_download(&mut self, download: &Download) -> io::Result<()> {
        if self.fail_downloads {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.downloads.push(download.clone());
        Ok(())
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }
}

pub type TestController = ViewController<RecordingView, MemoryStore>;

pub fn api(base_url: &str) -> FlightApiClient {
    FlightApiClient::new(base_url, Some(5), "skybook-test/0.1")
        .expect("client construction should not fail")
}

pub fn offer_json(id: i64, number: &str, price: f64) -> Value {
    json!({
        "flight_id": id,
        "airline": "IndiGo",
        "flight_number": number,
        "source": "Delhi",
        "destination": "Mumbai",
        "departure_time": "2025-11-01T10:00:00",
        "arrival_time": "2025-11-01T12:00:00",
        "duration_minutes": 120,
        "dynamic_price": price,
        "pricing_tier": "standard"
    })
}

pub fn confirmation_json() -> Value {
    json!({
        "pnr": "X1",
        "flight_number": "AI101",
        "passenger": { "name": "A" },
        "price": 5000
    })
}
