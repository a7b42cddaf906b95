mod commands;
mod shell;
mod terminal;

use clap::{Parser, Subcommand, ValueEnum};
use skybook_client::client::DEFAULT_BOOKINGS_LIMIT;
use skybook_client::FlightApiClient;
use skybook_core::{BookingForm, FlightId, FlightSort, SearchForm, SortKey, SortOrder};
use skybook_frontend::{AppState, UiEvent};
use tracing_subscriber::EnvFilter;

use crate::commands::BookArgs;

#[derive(Debug, Parser)]
#[command(name = "skybook")]
#[command(about = "Search and book flights from the terminal")]
struct Cli {
    /// Flight API base URL (overrides `SKYBOOK_API_BASE_URL`)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Interactive session (the default)
    Shell,
    /// Search for flights
    Search {
        #[arg(long)]
        origin: String,
        #[arg(long)]
        destination: String,
        /// Travel date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Ask the backend to sort results
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,
    },
    /// Book a flight from a previous search
    Book {
        #[arg(long)]
        flight_id: FlightId,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        flight_number: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, allow_hyphen_values = true)]
        age: String,
    },
    /// Export or print the last booking confirmation
    Receipt {
        #[arg(value_enum)]
        format: ReceiptFormat,
    },
    /// List every flight, not just those matching a search
    Flights {
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        #[arg(long, requires = "sort")]
        desc: bool,
    },
    /// Look up or cancel a booking by PNR
    Booking {
        #[command(subcommand)]
        action: BookingAction,
    },
    /// List recent bookings, newest first
    Bookings {
        #[arg(long, default_value_t = DEFAULT_BOOKINGS_LIMIT)]
        limit: u32,
    },
    /// Check that the backend is reachable
    Health,
}

#[derive(Debug, Subcommand)]
enum BookingAction {
    /// Show the booking's current status
    Status {
        /// Defaults to the PNR of the last stored confirmation
        pnr: Option<String>,
    },
    /// Cancel the booking
    Cancel {
        /// Defaults to the PNR of the last stored confirmation
        pnr: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    Price,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReceiptFormat {
    /// Save booking_receipt.json
    Json,
    /// Save booking_receipt.pdf rendered by the backend
    Pdf,
    /// Print the stored confirmation
    Show,
}

fn flight_sort(sort: Option<SortArg>, desc: bool) -> Option<FlightSort> {
    sort.map(|key| FlightSort {
        key: match key {
            SortArg::Price => SortKey::Price,
            SortArg::Duration => SortKey::Duration,
        },
        order: if desc { SortOrder::Desc } else { SortOrder::Asc },
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = skybook_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(url) = cli.api_url {
        config.api_base_url = url.trim_end_matches('/').to_owned();
    }
    tracing::debug!(?config, "configuration loaded");

    let api = FlightApiClient::from_config(&config)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut controller = commands::controller(api, &config, AppState::default());
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            shell::Shell::new(stdin, std::io::stdout())
                .run(&mut controller)
                .await?;
        }
        Commands::Search {
            origin,
            destination,
            date,
            sort,
            desc,
        } => {
            let form = SearchForm {
                origin,
                destination,
                date,
            };
            commands::run_search(api, &config, form, flight_sort(sort, desc)).await?;
        }
        Commands::Book {
            flight_id,
            price,
            flight_number,
            name,
            email,
            age,
        } => {
            let args = BookArgs {
                flight_id,
                price,
                flight_number,
                passenger: BookingForm { name, email, age },
            };
            commands::run_book(api, &config, args).await?;
        }
        Commands::Receipt { format } => match format {
            ReceiptFormat::Json => {
                commands::run_receipt_download(api, &config, UiEvent::DownloadJson).await?;
            }
            ReceiptFormat::Pdf => {
                commands::run_receipt_download(api, &config, UiEvent::DownloadPdf).await?;
            }
            ReceiptFormat::Show => commands::run_receipt_show(&config)?,
        },
        Commands::Flights { sort, desc } => {
            commands::run_list_flights(&api, &config, flight_sort(sort, desc)).await?;
        }
        Commands::Booking { action } => match action {
            BookingAction::Status { pnr } => {
                commands::run_booking_status(&api, &config, pnr).await?;
            }
            BookingAction::Cancel { pnr } => {
                commands::run_cancel_booking(&api, &config, pnr).await?;
            }
        },
        Commands::Bookings { limit } => commands::run_list_bookings(&api, limit).await?,
        Commands::Health => commands::run_health(&api).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
