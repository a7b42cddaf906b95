use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["skybook"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn help_needs_no_configuration() {
    let err = Cli::try_parse_from(["skybook", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn parses_shell_command() {
    let cli = Cli::try_parse_from(["skybook", "shell"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Shell)));
}

#[test]
fn parses_search_without_sort() {
    let cli = Cli::try_parse_from([
        "skybook",
        "search",
        "--origin",
        "Delhi",
        "--destination",
        "Mumbai",
        "--date",
        "2025-11-01",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            ref origin,
            sort: None,
            desc: false,
            ..
        }) if origin == "Delhi"
    ));
}

#[test]
fn parses_search_with_sort_desc() {
    let cli = Cli::try_parse_from([
        "skybook",
        "search",
        "--origin",
        "Delhi",
        "--destination",
        "Mumbai",
        "--date",
        "2025-11-01",
        "--sort",
        "price",
        "--desc",
    ])
    .unwrap();
    let Some(Commands::Search { sort, desc, .. }) = cli.command else {
        panic!("expected search command");
    };
    assert_eq!(
        flight_sort(sort, desc),
        Some(FlightSort {
            key: SortKey::Price,
            order: SortOrder::Desc,
        })
    );
}

#[test]
fn desc_requires_sort() {
    let result = Cli::try_parse_from([
        "skybook",
        "search",
        "--origin",
        "Delhi",
        "--destination",
        "Mumbai",
        "--date",
        "2025-11-01",
        "--desc",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_book_with_numeric_and_text_ids() {
    let cli = Cli::try_parse_from([
        "skybook",
        "book",
        "--flight-id",
        "3",
        "--price",
        "4100.5",
        "--flight-number",
        "SJ789",
        "--name",
        "Asha",
        "--email",
        "asha@example.com",
        "--age",
        "31",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Book {
            flight_id: FlightId::Number(3),
            ..
        })
    ));

    let cli = Cli::try_parse_from([
        "skybook",
        "book",
        "--flight-id",
        "F1",
        "--price",
        "5000",
        "--flight-number",
        "AI101",
        "--name",
        "A",
        "--email",
        "a@example.com",
        "--age",
        "-",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Book {
            flight_id: FlightId::Text(ref id),
            ref age,
            ..
        }) if id == "F1" && age == "-"
    ));
}

#[test]
fn parses_receipt_formats() {
    for (arg, expected) in [
        ("json", ReceiptFormat::Json),
        ("pdf", ReceiptFormat::Pdf),
        ("show", ReceiptFormat::Show),
    ] {
        let cli = Cli::try_parse_from(["skybook", "receipt", arg]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Receipt { format }) if format == expected
        ));
    }
}

#[test]
fn api_url_is_global() {
    let cli = Cli::try_parse_from(["skybook", "health", "--api-url", "http://10.0.0.2:8000/"])
        .unwrap();
    assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.2:8000/"));
    assert!(matches!(cli.command, Some(Commands::Health)));
}

#[test]
fn parses_flights_listing() {
    let cli = Cli::try_parse_from(["skybook", "flights", "--sort", "duration"]).unwrap();
    let Some(Commands::Flights { sort, desc }) = cli.command else {
        panic!("expected flights command");
    };
    assert_eq!(sort, Some(SortArg::Duration));
    assert!(!desc);
}

#[test]
fn booking_pnr_is_optional() {
    let cli = Cli::try_parse_from(["skybook", "booking", "status", "AB12CD"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Booking {
            action: BookingAction::Status { pnr: Some(ref pnr) }
        }) if pnr == "AB12CD"
    ));

    let cli = Cli::try_parse_from(["skybook", "booking", "cancel"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Booking {
            action: BookingAction::Cancel { pnr: None }
        })
    ));
}

#[test]
fn bookings_limit_defaults_to_backend_page_size() {
    let cli = Cli::try_parse_from(["skybook", "bookings"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Bookings { limit }) if limit == DEFAULT_BOOKINGS_LIMIT
    ));

    let cli = Cli::try_parse_from(["skybook", "bookings", "--limit", "5"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Bookings { limit: 5 })));
}
