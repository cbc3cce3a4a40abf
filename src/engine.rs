//! Single-entry matching engine facade.
//!
//! Holds the order book so the pipeline can submit orders without managing
//! [`OrderBook`] and [`match_order`] directly. The engine owns the book
//! exclusively for its lifetime; every mutation happens inside one
//! [`Engine::submit`] call.

use crate::execution::ExecutionEvent;
use crate::matching::match_order;
use crate::order_book::{BookSnapshot, OrderBook};
use crate::types::{Instrument, Order};
use log::info;

/// Batch matching engine over all instruments.
///
/// Orders must arrive pre-validated and in submission order; submission order
/// is the only ordering guarantee the engine relies on.
#[derive(Debug, Default)]
pub struct Engine {
    book: OrderBook,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            book: OrderBook::new(),
        }
    }

    /// Submits a validated order: runs matching and returns the execution
    /// events in emission order. Never rejects; rejection belongs to the
    /// validator.
    pub fn submit(&mut self, order: Order) -> Vec<ExecutionEvent> {
        info!(
            "order submitted order_id={} instrument={} side={:?} quantity={} price={}",
            order.order_id, order.instrument, order.side, order.quantity, order.price
        );
        let events = match_order(&mut self.book, order);
        for event in &events {
            info!(
                "execution order_id={} status={:?} quantity={} price={}",
                event.order_id, event.status, event.quantity, event.price
            );
        }
        events
    }

    /// Read-only snapshot of resting liquidity (bids then asks, sorted).
    pub fn snapshot(&self) -> BookSnapshot {
        self.book.snapshot()
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Best bid price for an instrument, if any.
    pub fn best_bid(&self, instrument: Instrument) -> Option<rust_decimal::Decimal> {
        self.book.best_bid(instrument)
    }

    /// Best ask price for an instrument, if any.
    pub fn best_ask(&self, instrument: Instrument) -> Option<rust_decimal::Decimal> {
        self.book.best_ask(instrument)
    }
}
