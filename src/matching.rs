//! Price-time priority matching.
//!
//! [`match_order`] resolves one accepted order against the book: consumes
//! eligible resting orders whole (best price first, oldest first at equal
//! price), reports each consumption, and rests any remainder on the
//! aggressor's own side at its original limit price.

use crate::execution::ExecutionEvent;
use crate::order_book::OrderBook;
use crate::types::{Order, OrderStatus, Side};

/// Runs matching for one incoming order.
///
/// Every match step executes at the resting order's price (price improvement
/// accrues to the resting side) and emits two events: the aggressor snapshot
/// for the consumed quantity, then the resting order's Fill. An order that
/// finds no match rests in full and emits a single New event; a partial
/// remainder rests silently with status Pfill already reported.
pub fn match_order(book: &mut OrderBook, order: Order) -> Vec<ExecutionEvent> {
    let (consumed, leftover) = match order.side {
        Side::Buy => book.take_from_asks(order.instrument, order.price, order.quantity),
        Side::Sell => book.take_from_bids(order.instrument, order.price, order.quantity),
    };

    let mut events = Vec::with_capacity(consumed.len() * 2 + 1);
    let mut remaining = order.quantity;
    for resting in consumed {
        remaining -= resting.quantity;

        let mut step = order.clone();
        step.quantity = resting.quantity;
        step.price = resting.price;
        step.status = if remaining == 0 {
            OrderStatus::Fill
        } else {
            OrderStatus::PartialFill
        };
        events.push(ExecutionEvent::from_order(&step));

        let mut filled = resting;
        filled.status = OrderStatus::Fill;
        events.push(ExecutionEvent::from_order(&filled));
    }
    debug_assert_eq!(remaining, leftover);

    if remaining > 0 {
        let mut rest = order;
        rest.quantity = remaining;
        rest.status = if events.is_empty() {
            OrderStatus::New
        } else {
            OrderStatus::PartialFill
        };
        if rest.status == OrderStatus::New {
            events.push(ExecutionEvent::from_order(&rest));
        }
        book.insert(rest);
    }

    events
}
