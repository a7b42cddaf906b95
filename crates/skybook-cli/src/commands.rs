//! One-shot subcommands.
//!
//! Each builds a controller on the terminal view and replays the UI events
//! the equivalent page interaction would raise.

use anyhow::Context;
use skybook_client::FlightApiClient;
use skybook_core::{AppConfig, BookingForm, FlightId, FlightSort, SearchForm, Section};
use skybook_frontend::storage::load_confirmation;
use skybook_frontend::{
    AppState, BookingTrigger, FileStore, KeyValueStore, ResultsPane, UiEvent, View,
    ViewController,
};

use crate::terminal::{booking_line, TerminalView};

type TerminalController = ViewController<TerminalView<std::io::Stdout>, FileStore>;

pub(crate) fn controller(
    api: FlightApiClient,
    config: &AppConfig,
    state: AppState,
) -> TerminalController {
    ViewController::mount_with_state(
        api,
        TerminalView::new(std::io::stdout(), &config.download_dir),
        FileStore::new(&config.storage_path),
        state,
    )
}

pub(crate) async fn run_search(
    api: FlightApiClient,
    config: &AppConfig,
    form: SearchForm,
    sort: Option<FlightSort>,
) -> anyhow::Result<()> {
    let mut controller = controller(api, config, AppState::default());
    controller
        .dispatch(UiEvent::SearchSubmitted { form, sort })
        .await?;
    Ok(())
}

/// Parameters of the `book` subcommand.
pub(crate) struct BookArgs {
    pub(crate) flight_id: FlightId,
    pub(crate) price: f64,
    pub(crate) flight_number: String,
    pub(crate) passenger: BookingForm,
}

/// Selects a flight as if its card were on screen, then submits the booking
/// form.
pub(crate) async fn run_book(
    api: FlightApiClient,
    config: &AppConfig,
    args: BookArgs,
) -> anyhow::Result<()> {
    let mut controller = controller(api, config, AppState::at(Section::Results));
    controller
        .dispatch(UiEvent::BookFlight(BookingTrigger {
            flight_id: args.flight_id,
            price: args.price,
            flight_number: args.flight_number,
        }))
        .await?;
    controller
        .dispatch(UiEvent::BookingSubmitted(args.passenger))
        .await?;
    Ok(())
}

pub(crate) async fn run_receipt_download(
    api: FlightApiClient,
    config: &AppConfig,
    event: UiEvent,
) -> anyhow::Result<()> {
    let mut controller = controller(api, config, AppState::at(Section::Confirmation));
    controller.dispatch(event).await?;
    Ok(())
}

/// Prints the stored confirmation as pretty JSON.
pub(crate) fn run_receipt_show(config: &AppConfig) -> anyhow::Result<()> {
    let store = FileStore::new(&config.storage_path);
    let confirmation = load_confirmation(&store)?;
    println!("{}", serde_json::to_string_pretty(&confirmation)?);
    Ok(())
}

pub(crate) async fn run_list_flights(
    api: &FlightApiClient,
    config: &AppConfig,
    sort: Option<FlightSort>,
) -> anyhow::Result<()> {
    let offers = api.list_flights(sort).await?;
    let mut view = TerminalView::new(std::io::stdout(), &config.download_dir);
    view.render_results(&ResultsPane::from_offers(&offers));
    Ok(())
}

/// Uses `pnr` if given, otherwise the PNR of the stored confirmation.
pub(crate) fn resolve_pnr<S: KeyValueStore>(
    store: &S,
    pnr: Option<String>,
) -> anyhow::Result<String> {
    if let Some(pnr) = pnr {
        return Ok(pnr);
    }
    let confirmation =
        load_confirmation(store).context("no PNR given and no stored confirmation to take it from")?;
    confirmation
        .pnr()
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
        .context("stored confirmation has no PNR")
}

pub(crate) async fn run_booking_status(
    api: &FlightApiClient,
    config: &AppConfig,
    pnr: Option<String>,
) -> anyhow::Result<()> {
    let pnr = resolve_pnr(&FileStore::new(&config.storage_path), pnr)?;
    let record = api.booking(&pnr).await?;
    println!("{}", booking_line(&record));
    Ok(())
}

pub(crate) async fn run_cancel_booking(
    api: &FlightApiClient,
    config: &AppConfig,
    pnr: Option<String>,
) -> anyhow::Result<()> {
    let pnr = resolve_pnr(&FileStore::new(&config.storage_path), pnr)?;
    let notice = api.cancel_booking(&pnr).await?;
    tracing::info!(pnr = %notice.pnr, "booking cancelled");
    println!("{} ({})", notice.message, notice.pnr);
    Ok(())
}

pub(crate) async fn run_list_bookings(api: &FlightApiClient, limit: u32) -> anyhow::Result<()> {
    let bookings = api.list_bookings(limit).await?;
    if bookings.is_empty() {
        println!("No bookings found.");
    }
    for record in &bookings {
        println!("{}", booking_line(record));
    }
    Ok(())
}

pub(crate) async fn run_health(api: &FlightApiClient) -> anyhow::Result<()> {
    let health = api.health().await?;
    let server_time = health.server_time.as_deref().unwrap_or("\u{2014}");
    println!(
        "{} is {} (server time {server_time})",
        api.base_url(),
        health.status
    );
    if !health.is_ok() {
        anyhow::bail!("backend reported status {}", health.status);
    }
    Ok(())
}
