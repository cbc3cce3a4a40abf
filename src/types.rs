//! Core types for the batch matching engine (charter data models).
//!
//! [`OrderRecord`] is the raw shape parsed from one input line; [`Order`] is
//! the validated order the book operates on. Side codes, instrument names,
//! and status labels are mapped at the boundary by exhaustive match.

use rust_decimal::Decimal;
use std::fmt;

/// Order identifier: 1-based position of the order in the input batch.
/// Rendered as `ord{n}` in reports. Ids are assigned in submission sequence,
/// so id order doubles as time priority for the tie-break.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ord{}", self.0)
    }
}

/// Tradable instrument. Matching is scoped per instrument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Instrument {
    Rose,
    Lavender,
    Lotus,
    Tulip,
    Orchid,
}

impl Instrument {
    /// Every instrument the exchange trades.
    pub const ALL: [Instrument; 5] = [
        Instrument::Rose,
        Instrument::Lavender,
        Instrument::Lotus,
        Instrument::Tulip,
        Instrument::Orchid,
    ];

    /// Looks up an instrument by its exact name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Rose" => Some(Instrument::Rose),
            "Lavender" => Some(Instrument::Lavender),
            "Lotus" => Some(Instrument::Lotus),
            "Tulip" => Some(Instrument::Tulip),
            "Orchid" => Some(Instrument::Orchid),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Instrument::Rose => "Rose",
            Instrument::Lavender => "Lavender",
            Instrument::Lotus => "Lotus",
            Instrument::Tulip => "Tulip",
            Instrument::Orchid => "Orchid",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Order side. Wire code: 1 = Buy, 2 = Sell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Side::Buy),
            2 => Some(Side::Sell),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Side::Buy => 1,
            Side::Sell => 2,
        }
    }
}

/// Order lifecycle status. Rejected and Fill are terminal; PartialFill can
/// only transition to Fill when a later aggressor consumes the remainder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OrderStatus {
    New,
    Rejected,
    Fill,
    PartialFill,
}

impl OrderStatus {
    /// Report label. `PartialFill` is abbreviated `Pfill` in the report format.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::Rejected => "Rejected",
            OrderStatus::Fill => "Fill",
            OrderStatus::PartialFill => "Pfill",
        }
    }
}

/// Raw order as parsed from one input line, before validation.
///
/// `side` stays a raw code and `instrument` a raw string so that invalid
/// values reach the validator and are echoed back in rejection reports.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub client_order_id: String,
    pub instrument: String,
    pub side: i64,
    pub quantity: i64,
    pub price: Decimal,
}

/// Validated order.
///
/// `quantity` is the remaining open quantity and decreases as fills consume
/// it; every other field is immutable after creation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub client_order_id: String,
    pub instrument: Instrument,
    pub side: Side,
    pub quantity: i64,
    pub price: Decimal,
    pub status: OrderStatus,
}

impl Order {
    /// Builds a New order from a record the validator has already accepted.
    pub fn from_record(record: &OrderRecord, instrument: Instrument, side: Side) -> Self {
        Self {
            order_id: record.order_id,
            client_order_id: record.client_order_id.clone(),
            instrument,
            side,
            quantity: record.quantity,
            price: record.price,
            status: OrderStatus::New,
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self.side, Side::Buy)
    }

    pub fn is_sell(&self) -> bool {
        matches!(self.side, Side::Sell)
    }
}
