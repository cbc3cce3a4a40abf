//! End-to-end batch tests: CSV in, execution report CSV out.

use flower_exchange::{OrderManager, PipelineConfig, ReportError};
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("flower_exchange_e2e_{}_{}", std::process::id(), name));
    std::fs::create_dir_all(&path).unwrap();
    path
}

fn run_batch(name: &str, input: &str) -> Vec<String> {
    let dir = scratch_dir(name);
    let input_path = dir.join("orders.csv");
    let output_path = dir.join("report.csv");
    std::fs::write(&input_path, input).unwrap();
    let manager = OrderManager::new(PipelineConfig {
        input: input_path,
        output: output_path.clone(),
        snapshot: None,
    });
    manager.run().unwrap();
    let report = std::fs::read_to_string(&output_path).unwrap();
    std::fs::remove_dir_all(&dir).ok();
    report.lines().map(|l| l.to_string()).collect()
}

#[test]
fn report_starts_with_header_and_ends_with_elapsed_row() {
    let lines = run_batch("frame", "aa1,Rose,1,100,55.00\n");
    assert_eq!(
        lines[0],
        "Order ID,Cl. Ord. ID,Instrument,Side,Status,Quantity,Price,Reason"
    );
    assert!(
        lines.last().unwrap().starts_with("Execution Time (ms),"),
        "last row is the elapsed-time trailer: {:?}",
        lines.last()
    );
}

#[test]
fn unmatched_order_reports_new_and_rests() {
    let lines = run_batch("resting", "aa1,Rose,1,50,100.00\n");
    assert_eq!(lines[1], "ord1,aa1,Rose,1,New,50,100.00");
    assert_eq!(lines.len(), 3, "header, one event, trailer");
}

#[test]
fn exact_match_reports_fill_pair() {
    let lines = run_batch(
        "exact",
        "aa1,Rose,2,100,55.00\naa2,Rose,1,100,55.00\n",
    );
    assert_eq!(lines[1], "ord1,aa1,Rose,2,New,100,55.00");
    assert_eq!(lines[2], "ord2,aa2,Rose,1,Fill,100,55.00");
    assert_eq!(lines[3], "ord1,aa1,Rose,2,Fill,100,55.00");
}

#[test]
fn partial_fill_reports_pfill_at_resting_price() {
    // Resting sell 30 @ 95; buy 50 @ 100 consumes it and rests 20 @ 100.
    let lines = run_batch(
        "partial",
        "aa1,Rose,2,30,95.00\naa2,Rose,1,50,100.00\n",
    );
    assert_eq!(lines[1], "ord1,aa1,Rose,2,New,30,95.00");
    assert_eq!(lines[2], "ord2,aa2,Rose,1,Pfill,30,95.00");
    assert_eq!(lines[3], "ord1,aa1,Rose,2,Fill,30,95.00");
    assert_eq!(lines.len(), 5, "no extra event for the silently resting remainder");
}

#[test]
fn rejections_report_reasons_in_precedence_order() {
    let lines = run_batch(
        "rejects",
        "aa1,Daisy,1,50,10.00\naa2,Lotus,1,15,10.00\naa3,Lotus,1,50,0.00\naa4,Lotus,3,50,10.00\n,Lotus,1,50,10.00\n",
    );
    assert_eq!(lines[1], "ord1,aa1,Daisy,1,Rejected,50,10.00,Invalid instrument");
    assert_eq!(lines[2], "ord2,aa2,Lotus,1,Rejected,15,10.00,Invalid quantity");
    assert_eq!(lines[3], "ord3,aa3,Lotus,1,Rejected,50,0.00,Invalid price");
    assert_eq!(lines[4], "ord4,aa4,Lotus,3,Rejected,50,10.00,Invalid side");
    assert_eq!(lines[5], "ord5,,Lotus,1,Rejected,50,10.00,Empty fields");
}

#[test]
fn instruments_never_cross_match() {
    let lines = run_batch(
        "scoped",
        "aa1,Rose,2,50,10.00\naa2,Tulip,1,50,10.00\n",
    );
    assert_eq!(lines[1], "ord1,aa1,Rose,2,New,50,10.00");
    assert_eq!(lines[2], "ord2,aa2,Tulip,1,New,50,10.00");
}

#[test]
fn aggressor_walks_the_book_within_one_submission() {
    let lines = run_batch(
        "walk",
        "aa1,Orchid,2,20,95.00\naa2,Orchid,2,30,97.00\naa3,Orchid,1,50,100.00\n",
    );
    assert_eq!(lines[3], "ord3,aa3,Orchid,1,Pfill,20,95.00");
    assert_eq!(lines[4], "ord1,aa1,Orchid,2,Fill,20,95.00");
    assert_eq!(lines[5], "ord3,aa3,Orchid,1,Fill,30,97.00");
    assert_eq!(lines[6], "ord2,aa2,Orchid,2,Fill,30,97.00");
}

#[test]
fn malformed_record_aborts_the_batch() {
    let dir = scratch_dir("malformed");
    let input_path = dir.join("orders.csv");
    let output_path = dir.join("report.csv");
    std::fs::write(&input_path, "aa1,Rose,1,abc,55.00\n").unwrap();
    let manager = OrderManager::new(PipelineConfig {
        input: input_path,
        output: output_path,
        snapshot: None,
    });
    let err = manager.run().unwrap_err();
    std::fs::remove_dir_all(&dir).ok();
    assert!(matches!(
        err,
        ReportError::Malformed { line: 1, field: "quantity" }
    ));
}
