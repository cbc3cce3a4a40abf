//! Resting liquidity across all instruments: bids and asks with price-time priority.
//!
//! Both sides are plain sorted vectors; bids descend by price, asks ascend,
//! ties go to the lower order id (oldest submission). Consumed orders are
//! removed by collecting matched indices and rebuilding the side, never by
//! erasing mid-iteration.

use crate::types::{Instrument, Order, Side};
use rust_decimal::Decimal;

/// Read-only snapshot of resting liquidity in current sort order.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BookSnapshot {
    pub bids: Vec<Order>,
    pub asks: Vec<Order>,
}

/// The order book. Holds resting orders for every instrument; an order lives
/// in at most one side, only while its remaining quantity is positive.
#[derive(Debug, Default)]
pub struct OrderBook {
    bids: Vec<Order>,
    asks: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }

    /// Rests an order on its own side and restores sort order.
    /// Caller guarantees positive remaining quantity.
    pub fn insert(&mut self, order: Order) {
        match order.side {
            Side::Buy => self.bids.push(order),
            Side::Sell => self.asks.push(order),
        }
        self.sort();
    }

    fn sort(&mut self) {
        self.bids
            .sort_by(|a, b| b.price.cmp(&a.price).then(a.order_id.cmp(&b.order_id)));
        self.asks
            .sort_by(|a, b| a.price.cmp(&b.price).then(a.order_id.cmp(&b.order_id)));
    }

    /// Takes the resting asks an incoming buy can consume: same instrument,
    /// price at or below `price_limit`, and quantity covered entirely by the
    /// aggressor's remaining quantity (a resting order is never split).
    ///
    /// Asks too large to consume whole are skipped, not a scan break; the scan
    /// stops at the first same-instrument ask above the limit or when the
    /// aggressor quantity reaches zero. Returns the consumed asks in priority
    /// order and the leftover aggressor quantity.
    pub fn take_from_asks(
        &mut self,
        instrument: Instrument,
        price_limit: Decimal,
        quantity: i64,
    ) -> (Vec<Order>, i64) {
        let mut remaining = quantity;
        let mut matched = Vec::new();
        for (i, ask) in self.asks.iter().enumerate() {
            if remaining == 0 {
                break;
            }
            if ask.instrument != instrument {
                continue;
            }
            if ask.price > price_limit {
                // Asks ascend by price: nothing further for this instrument crosses.
                break;
            }
            if ask.quantity <= remaining {
                remaining -= ask.quantity;
                matched.push(i);
            }
        }
        let consumed = Self::rebuild_without(&mut self.asks, &matched);
        (consumed, remaining)
    }

    /// Mirror of [`take_from_asks`](Self::take_from_asks) for an incoming
    /// sell: bids descend by price, so the scan stops at the first
    /// same-instrument bid below `price_limit`.
    pub fn take_from_bids(
        &mut self,
        instrument: Instrument,
        price_limit: Decimal,
        quantity: i64,
    ) -> (Vec<Order>, i64) {
        let mut remaining = quantity;
        let mut matched = Vec::new();
        for (i, bid) in self.bids.iter().enumerate() {
            if remaining == 0 {
                break;
            }
            if bid.instrument != instrument {
                continue;
            }
            if bid.price < price_limit {
                break;
            }
            if bid.quantity <= remaining {
                remaining -= bid.quantity;
                matched.push(i);
            }
        }
        let consumed = Self::rebuild_without(&mut self.bids, &matched);
        (consumed, remaining)
    }

    /// Splits `side` into (matched, kept) by index and keeps the rest, in
    /// order. `matched` must be ascending.
    fn rebuild_without(side: &mut Vec<Order>, matched: &[usize]) -> Vec<Order> {
        if matched.is_empty() {
            return Vec::new();
        }
        let mut consumed = Vec::with_capacity(matched.len());
        let mut kept = Vec::with_capacity(side.len() - matched.len());
        for (i, order) in side.drain(..).enumerate() {
            if matched.binary_search(&i).is_ok() {
                consumed.push(order);
            } else {
                kept.push(order);
            }
        }
        *side = kept;
        consumed
    }

    /// Resting buy orders, best price first.
    pub fn bids(&self) -> &[Order] {
        &self.bids
    }

    /// Resting sell orders, best price first.
    pub fn asks(&self) -> &[Order] {
        &self.asks
    }

    /// Best bid price for an instrument (None if no resting buy interest).
    pub fn best_bid(&self, instrument: Instrument) -> Option<Decimal> {
        self.bids
            .iter()
            .find(|o| o.instrument == instrument)
            .map(|o| o.price)
    }

    /// Best ask price for an instrument (None if no resting sell interest).
    pub fn best_ask(&self, instrument: Instrument) -> Option<Decimal> {
        self.asks
            .iter()
            .find(|o| o.instrument == instrument)
            .map(|o| o.price)
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            bids: self.bids.clone(),
            asks: self.asks.clone(),
        }
    }
}
