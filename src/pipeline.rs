//! Batch orchestration: read, validate, match, report.
//!
//! No algorithmic content lives here; the pipeline fixes the call order and
//! owns the I/O adapters. All file locations come in through
//! [`PipelineConfig`]; nothing is process-global.

use crate::engine::Engine;
use crate::execution::ExecutionEvent;
use crate::order_book::BookSnapshot;
use crate::report::{read_orders, write_snapshot, ReportError, ReportWriter};
use crate::types::Order;
use crate::validation::validate;
use log::{info, warn};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Where the pipeline reads orders and writes reports.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Optional JSON export of the final resting book.
    pub snapshot: Option<PathBuf>,
}

/// What a completed batch run produced.
#[derive(Debug)]
pub struct BatchSummary {
    pub orders_read: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub events_written: usize,
    pub elapsed: Duration,
    /// Final resting book, bids then asks in current sort order.
    pub book: BookSnapshot,
}

/// Sequences one batch end to end: read → per order, validate then match →
/// elapsed-time row → final book snapshot.
pub struct OrderManager {
    config: PipelineConfig,
}

impl OrderManager {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Processes the whole batch. Validation failures become Rejected rows
    /// and processing continues; only unreadable input, a malformed record,
    /// or an unwritable report aborts.
    pub fn run(&self) -> Result<BatchSummary, ReportError> {
        let records = read_orders(&self.config.input)?;
        let orders_read = records.len();
        let mut writer = ReportWriter::create(&self.config.output)?;
        let mut engine = Engine::new();

        let mut accepted = 0usize;
        let mut rejected = 0usize;
        let mut events_written = 0usize;
        let started = Instant::now();

        for record in records {
            match validate(&record) {
                Ok((instrument, side)) => {
                    accepted += 1;
                    let order = Order::from_record(&record, instrument, side);
                    for event in engine.submit(order) {
                        writer.write_event(&event)?;
                        events_written += 1;
                    }
                }
                Err(reason) => {
                    rejected += 1;
                    warn!(
                        "order rejected order_id={} client_order_id={} reason={}",
                        record.order_id, record.client_order_id, reason
                    );
                    writer.write_event(&ExecutionEvent::rejected(&record, reason))?;
                    events_written += 1;
                }
            }
        }

        let elapsed = started.elapsed();
        writer.write_elapsed(elapsed)?;
        writer.flush()?;

        let book = engine.snapshot();
        if let Some(path) = &self.config.snapshot {
            write_snapshot(path, &book)?;
        }
        info!(
            "batch complete orders={} accepted={} rejected={} events={} elapsed_ms={}",
            orders_read,
            accepted,
            rejected,
            events_written,
            elapsed.as_millis()
        );

        Ok(BatchSummary {
            orders_read,
            accepted,
            rejected,
            events_written,
            elapsed,
            book,
        })
    }
}
