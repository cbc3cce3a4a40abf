//! Execution events (charter data models).
//!
//! One [`ExecutionEvent`] is emitted per order state change: New when an
//! order rests unmatched, Rejected with a reason from the validator, and a
//! Fill/Pfill pair per match step. Events carry the raw instrument string and
//! side code so rejected input is echoed exactly as submitted.

use crate::types::{Order, OrderId, OrderRecord, OrderStatus};
use crate::validation::RejectReason;
use rust_decimal::Decimal;

/// One execution report row: an order snapshot at the moment of the event.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExecutionEvent {
    pub order_id: OrderId,
    pub client_order_id: String,
    pub instrument: String,
    /// Raw side code (1 = Buy, 2 = Sell; anything else only on rejections).
    pub side: i64,
    pub status: OrderStatus,
    pub quantity: i64,
    pub price: Decimal,
    /// Present only for Rejected events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ExecutionEvent {
    /// Snapshot of a validated order. Instrument and side are rendered to
    /// their wire forms here, at the boundary.
    pub fn from_order(order: &Order) -> Self {
        Self {
            order_id: order.order_id,
            client_order_id: order.client_order_id.clone(),
            instrument: order.instrument.name().to_string(),
            side: order.side.code(),
            status: order.status,
            quantity: order.quantity,
            price: order.price,
            reason: None,
        }
    }

    /// Rejection of a raw record by the validator. Fields are echoed verbatim.
    pub fn rejected(record: &OrderRecord, reason: RejectReason) -> Self {
        Self {
            order_id: record.order_id,
            client_order_id: record.client_order_id.clone(),
            instrument: record.instrument.clone(),
            side: record.side,
            status: OrderStatus::Rejected,
            quantity: record.quantity,
            price: record.price,
            reason: Some(reason.as_str().to_string()),
        }
    }
}
