//! CLI entry point: runs one batch through the pipeline.
//!
//! Usage: `flower_exchange <orders.csv> <report.csv> [snapshot.json]`.
//! Paths can also come from the ORDERS_FILE / REPORT_FILE / SNAPSHOT_FILE
//! environment variables.

use flower_exchange::{OrderManager, PipelineConfig};
use std::path::PathBuf;

fn main() {
    let _ = env_logger::try_init();

    let mut args = std::env::args().skip(1);
    let input = args.next().or_else(|| std::env::var("ORDERS_FILE").ok());
    let output = args.next().or_else(|| std::env::var("REPORT_FILE").ok());
    let (Some(input), Some(output)) = (input, output) else {
        eprintln!("usage: flower_exchange <orders.csv> <report.csv> [snapshot.json]");
        std::process::exit(2);
    };
    let snapshot = args
        .next()
        .or_else(|| std::env::var("SNAPSHOT_FILE").ok())
        .map(PathBuf::from);

    let manager = OrderManager::new(PipelineConfig {
        input: PathBuf::from(input),
        output: PathBuf::from(output),
        snapshot,
    });
    match manager.run() {
        Ok(summary) => {
            eprintln!(
                "processed {} orders ({} accepted, {} rejected) in {} ms; {} resting bids, {} resting asks",
                summary.orders_read,
                summary.accepted,
                summary.rejected,
                summary.elapsed.as_millis(),
                summary.book.bids.len(),
                summary.book.asks.len()
            );
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
