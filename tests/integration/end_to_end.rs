// tests/integration/end_to_end.rs
use customer_importer::{
    app,
    config::{ImportConfig, OutputTarget},
};
use customer_importer_domain::{RecordLayout, ReportOrder};

#[path = "../common/mod.rs"]
mod common;
use common::{MIXED, MIXED_REPORT, ROUND_TRIP, TempWorkspace, csv_with_rows};

fn file_config(ws: &TempWorkspace, input: &str, output: &str) -> ImportConfig {
    ImportConfig::new(ws.path().join(input), OutputTarget::File(ws.path().join(output)))
}

#[test]
fn round_trip_example() {
    let ws = TempWorkspace::new("round_trip");
    ws.create_file("customers.csv", ROUND_TRIP);

    app::run(&file_config(&ws, "customers.csv", "out.txt")).expect("import succeeds");

    assert_eq!(ws.read("out.txt").lines().collect::<Vec<_>>(), vec!["example.com: 2"]);
}

#[test]
fn mixed_file_counts_only_valid_emails() {
    let ws = TempWorkspace::new("mixed");
    ws.create_file("customers.csv", MIXED);

    let summary = app::run(&file_config(&ws, "customers.csv", "out.txt")).expect("import succeeds");

    assert_eq!(ws.read("out.txt").lines().collect::<Vec<_>>(), MIXED_REPORT.to_vec());
    assert_eq!(summary.valid_emails, 7);
    assert_eq!(summary.distinct_domains(), MIXED_REPORT.len());
    // The two-field row never reaches the aggregator.
    assert_eq!(summary.candidates, 10);
}

#[test]
fn output_is_strictly_ascending_and_sums_to_valid_count() {
    let ws = TempWorkspace::new("ascending");
    ws.create_file("customers.csv", MIXED);

    let summary = app::run(&file_config(&ws, "customers.csv", "out.txt")).unwrap();
    let out = ws.read("out.txt");

    let domains: Vec<&str> = out.lines().map(|l| l.split_once(": ").unwrap().0).collect();
    for pair in domains.windows(2) {
        assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
    }
    let total: usize = out.lines().map(|l| l.rsplit_once(": ").unwrap().1.parse::<usize>().unwrap()).sum();
    assert_eq!(total, summary.valid_emails);
}

#[test]
fn header_only_file_produces_empty_output() {
    let ws = TempWorkspace::new("header_only");
    ws.create_file("customers.csv", "first,last,only@example.com\n");

    app::run(&file_config(&ws, "customers.csv", "out.txt")).unwrap();

    assert_eq!(ws.read("out.txt"), "");
}

#[test]
fn rerun_is_byte_identical() {
    let ws = TempWorkspace::new("idempotent");
    ws.create_file("customers.csv", MIXED);
    let config = file_config(&ws, "customers.csv", "out.txt");

    app::run(&config).unwrap();
    let first = std::fs::read(ws.path().join("out.txt")).unwrap();
    app::run(&config).unwrap();
    let second = std::fs::read(ws.path().join("out.txt")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn existing_output_is_truncated() {
    let ws = TempWorkspace::new("truncate");
    ws.create_file("customers.csv", &csv_with_rows(&["a,b,x@one.com,M,1.1.1.1"]));
    ws.create_file("out.txt", "old.com: 99\nolder.com: 100\nleftover\n");

    app::run(&file_config(&ws, "customers.csv", "out.txt")).unwrap();

    assert_eq!(ws.read("out.txt").lines().collect::<Vec<_>>(), vec!["one.com: 1"]);
}

#[test]
fn count_order_and_custom_layout() {
    let ws = TempWorkspace::new("custom");
    ws.create_file(
        "customers.psv",
        "email|name\na@two.com|A\nb@one.com|B\nc@two.com|C\n",
    );
    let mut config = file_config(&ws, "customers.psv", "out.txt");
    config.layout = RecordLayout::new('|', 0).unwrap();
    config.order = ReportOrder::CountDesc;

    app::run(&config).unwrap();

    assert_eq!(ws.read("out.txt").lines().collect::<Vec<_>>(), vec!["two.com: 2", "one.com: 1"]);
}

#[test]
fn missing_input_is_an_error() {
    let ws = TempWorkspace::new("missing");

    let err = app::run(&file_config(&ws, "absent.csv", "out.txt")).unwrap_err();

    assert!(err.is_io());
    assert!(err.to_string().contains("absent.csv"));
    assert!(!ws.path().join("out.txt").exists());
}
