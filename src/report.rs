//! CSV input and execution report output (collaborator adapters).
//!
//! Input: one order per line, `clientOrderId,instrument,side,quantity,price`,
//! fields trimmed, order ids assigned from the 1-based line number. Output:
//! header row, one row per [`ExecutionEvent`], and a final elapsed-time row.
//! A malformed numeric field aborts the batch before anything reaches the
//! validator; the core only ever sees well-typed records.

use crate::execution::ExecutionEvent;
use crate::order_book::BookSnapshot;
use crate::types::{OrderId, OrderRecord};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

const REPORT_HEADER: &str = "Order ID,Cl. Ord. ID,Instrument,Side,Status,Quantity,Price,Reason";

/// Adapter-level failures. Both are fatal to the batch; business-rule
/// rejections never surface here.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: malformed {field} field")]
    Malformed { line: usize, field: &'static str },
    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

fn io_err(path: &Path, source: std::io::Error) -> ReportError {
    ReportError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Reads a batch of raw order records. Blank lines are skipped; every other
/// line must parse its numeric fields or the whole batch fails.
pub fn read_orders(path: impl AsRef<Path>) -> Result<Vec<OrderRecord>, ReportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_err(path, e))?;
    let mut records = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| io_err(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_record(line_no, &line)?);
    }
    Ok(records)
}

fn parse_record(line_no: usize, line: &str) -> Result<OrderRecord, ReportError> {
    let mut fields = line.split(',');
    let client_order_id = fields.next().unwrap_or("").trim().to_string();
    let instrument = fields.next().unwrap_or("").trim().to_string();
    let side = fields.next().unwrap_or("").trim();
    let quantity = fields.next().unwrap_or("").trim();
    let price = fields.next().unwrap_or("").trim();

    let side: i64 = side.parse().map_err(|_| ReportError::Malformed {
        line: line_no,
        field: "side",
    })?;
    let quantity: i64 = quantity.parse().map_err(|_| ReportError::Malformed {
        line: line_no,
        field: "quantity",
    })?;
    let price: Decimal = price.parse().map_err(|_| ReportError::Malformed {
        line: line_no,
        field: "price",
    })?;

    Ok(OrderRecord {
        order_id: OrderId(line_no as u64),
        client_order_id,
        instrument,
        side,
        quantity,
        price,
    })
}

/// Appends execution report rows to the output file in arrival order.
pub struct ReportWriter {
    path: String,
    out: BufWriter<File>,
}

impl ReportWriter {
    /// Creates (truncating) the report file and writes the header row.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| io_err(path, e))?;
        let mut writer = Self {
            path: path.display().to_string(),
            out: BufWriter::new(file),
        };
        writer.write_line(REPORT_HEADER)?;
        Ok(writer)
    }

    /// Writes one event row. Prices are reported with two decimal places; the
    /// reason column appears only on rejections.
    pub fn write_event(&mut self, event: &ExecutionEvent) -> Result<(), ReportError> {
        let mut row = format!(
            "{},{},{},{},{},{},{:.2}",
            event.order_id,
            event.client_order_id,
            event.instrument,
            event.side,
            event.status.label(),
            event.quantity,
            event.price,
        );
        if let Some(reason) = &event.reason {
            row.push(',');
            row.push_str(reason);
        }
        self.write_line(&row)
    }

    /// Appends the `Execution Time (ms),{n}` trailer row.
    pub fn write_elapsed(&mut self, elapsed: Duration) -> Result<(), ReportError> {
        let row = format!("Execution Time (ms),{}", elapsed.as_millis());
        self.write_line(&row)
    }

    pub fn flush(&mut self) -> Result<(), ReportError> {
        self.out.flush().map_err(|e| ReportError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write_line(&mut self, line: &str) -> Result<(), ReportError> {
        writeln!(self.out, "{}", line).map_err(|e| ReportError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Writes the final resting book as pretty JSON. Export only; the book is
/// never restored from a snapshot.
pub fn write_snapshot(path: impl AsRef<Path>, snapshot: &BookSnapshot) -> Result<(), ReportError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, json).map_err(|e| io_err(path, e))
}
