//! Order validation: business rules applied before an order reaches the book.
//!
//! [`validate`] is pure and total over well-typed records: an invalid order
//! becomes a Rejected report with a reason, never a hard failure.

use crate::types::{Instrument, OrderRecord, Side};
use rust_decimal::Decimal;
use std::fmt;

/// Quantities must be whole multiples of this many lots.
pub const LOT_MULTIPLE: i64 = 10;
/// Minimum valid quantity (inclusive).
pub const MIN_QUANTITY: i64 = 10;
/// Maximum valid quantity (exclusive).
pub const MAX_QUANTITY: i64 = 1000;

/// Why an order was rejected. [`RejectReason::as_str`] is the exact wording
/// that goes into the report's reason column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    EmptyFields,
    InvalidInstrument,
    InvalidQuantity,
    InvalidPrice,
    InvalidSide,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::EmptyFields => "Empty fields",
            RejectReason::InvalidInstrument => "Invalid instrument",
            RejectReason::InvalidQuantity => "Invalid quantity",
            RejectReason::InvalidPrice => "Invalid price",
            RejectReason::InvalidSide => "Invalid side",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates one raw record; returns the typed instrument and side on success.
///
/// Checks run in fixed precedence: empty fields, instrument, quantity, price,
/// side. The first failing check wins and is the only reason reported.
///
/// Quantity is valid iff it is a positive multiple of [`LOT_MULTIPLE`] in
/// `MIN_QUANTITY..MAX_QUANTITY` (at least 10 lots, below 1000).
pub fn validate(record: &OrderRecord) -> Result<(Instrument, Side), RejectReason> {
    if record.client_order_id.is_empty() || record.instrument.is_empty() {
        return Err(RejectReason::EmptyFields);
    }
    let instrument =
        Instrument::from_name(&record.instrument).ok_or(RejectReason::InvalidInstrument)?;
    let quantity = record.quantity;
    if quantity % LOT_MULTIPLE != 0 || quantity < MIN_QUANTITY || quantity >= MAX_QUANTITY {
        return Err(RejectReason::InvalidQuantity);
    }
    if record.price <= Decimal::ZERO {
        return Err(RejectReason::InvalidPrice);
    }
    let side = Side::from_code(record.side).ok_or(RejectReason::InvalidSide)?;
    Ok((instrument, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderId;

    fn record(client: &str, instrument: &str, side: i64, quantity: i64, price: i64) -> OrderRecord {
        OrderRecord {
            order_id: OrderId(1),
            client_order_id: client.into(),
            instrument: instrument.into(),
            side,
            quantity,
            price: Decimal::from(price),
        }
    }

    #[test]
    fn valid_order_returns_typed_instrument_and_side() {
        let r = record("aa1", "Rose", 1, 100, 55);
        assert_eq!(validate(&r), Ok((Instrument::Rose, Side::Buy)));
        let r = record("aa2", "Orchid", 2, 990, 1);
        assert_eq!(validate(&r), Ok((Instrument::Orchid, Side::Sell)));
    }

    #[test]
    fn empty_client_order_id_rejected() {
        let r = record("", "Rose", 1, 100, 55);
        assert_eq!(validate(&r), Err(RejectReason::EmptyFields));
    }

    #[test]
    fn empty_instrument_rejected() {
        let r = record("aa1", "", 1, 100, 55);
        assert_eq!(validate(&r), Err(RejectReason::EmptyFields));
    }

    #[test]
    fn unknown_instrument_rejected() {
        let r = record("aa1", "Daisy", 1, 100, 55);
        assert_eq!(validate(&r), Err(RejectReason::InvalidInstrument));
    }

    #[test]
    fn quantity_not_a_multiple_of_ten_rejected() {
        let r = record("aa1", "Rose", 1, 15, 55);
        assert_eq!(validate(&r), Err(RejectReason::InvalidQuantity));
    }

    #[test]
    fn quantity_bounds_are_inclusive_low_exclusive_high() {
        assert!(validate(&record("aa1", "Rose", 1, 10, 55)).is_ok());
        assert!(validate(&record("aa1", "Rose", 1, 990, 55)).is_ok());
        assert_eq!(
            validate(&record("aa1", "Rose", 1, 0, 55)),
            Err(RejectReason::InvalidQuantity)
        );
        assert_eq!(
            validate(&record("aa1", "Rose", 1, 1000, 55)),
            Err(RejectReason::InvalidQuantity)
        );
        assert_eq!(
            validate(&record("aa1", "Rose", 1, -10, 55)),
            Err(RejectReason::InvalidQuantity)
        );
    }

    #[test]
    fn non_positive_price_rejected() {
        assert_eq!(
            validate(&record("aa1", "Rose", 1, 100, 0)),
            Err(RejectReason::InvalidPrice)
        );
        assert_eq!(
            validate(&record("aa1", "Rose", 1, 100, -5)),
            Err(RejectReason::InvalidPrice)
        );
    }

    #[test]
    fn unknown_side_code_rejected() {
        assert_eq!(
            validate(&record("aa1", "Rose", 3, 100, 55)),
            Err(RejectReason::InvalidSide)
        );
        assert_eq!(
            validate(&record("aa1", "Rose", 0, 100, 55)),
            Err(RejectReason::InvalidSide)
        );
    }

    #[test]
    fn first_failing_check_wins() {
        // Everything wrong at once: empty fields outranks the rest.
        let r = record("", "Daisy", 9, 15, 0);
        assert_eq!(validate(&r), Err(RejectReason::EmptyFields));
        // Instrument outranks quantity, price, and side.
        let r = record("aa1", "Daisy", 9, 15, 0);
        assert_eq!(validate(&r), Err(RejectReason::InvalidInstrument));
        // Quantity outranks price and side.
        let r = record("aa1", "Rose", 9, 15, 0);
        assert_eq!(validate(&r), Err(RejectReason::InvalidQuantity));
        // Price outranks side.
        let r = record("aa1", "Rose", 9, 100, 0);
        assert_eq!(validate(&r), Err(RejectReason::InvalidPrice));
    }

    #[test]
    fn reason_strings_match_report_wording() {
        assert_eq!(RejectReason::EmptyFields.as_str(), "Empty fields");
        assert_eq!(RejectReason::InvalidInstrument.as_str(), "Invalid instrument");
        assert_eq!(RejectReason::InvalidQuantity.as_str(), "Invalid quantity");
        assert_eq!(RejectReason::InvalidPrice.as_str(), "Invalid price");
        assert_eq!(RejectReason::InvalidSide.as_str(), "Invalid side");
    }
}
