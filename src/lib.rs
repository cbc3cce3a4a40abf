//! # Flower Exchange
//!
//! Deterministic batch matching engine: order validation, price-time priority
//! matching, and per-order execution reports over a fixed set of five
//! instruments.
//!
//! ## Entry points
//!
//! For the whole batch workflow (CSV in, report CSV out), use
//! [`OrderManager`] with a [`PipelineConfig`]. To drive matching directly,
//! validate records with [`validate`] and submit the resulting orders to an
//! [`Engine`].
//!
//! ## Example
//!
//! ```rust
//! use flower_exchange::{Engine, Instrument, Order, OrderId, OrderStatus, Side};
//! use rust_decimal::Decimal;
//!
//! let mut engine = Engine::new();
//! let order = Order {
//!     order_id: OrderId(1),
//!     client_order_id: "aa1".into(),
//!     instrument: Instrument::Rose,
//!     side: Side::Buy,
//!     quantity: 100,
//!     price: Decimal::from(55),
//!     status: OrderStatus::New,
//! };
//! let events = engine.submit(order);
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].status, OrderStatus::New);
//! ```
//!
//! ## Lower-level API
//!
//! You can also use [`OrderBook`] and [`match_order`] directly if you manage
//! the submission sequence yourself.

pub mod engine;
pub mod execution;
pub mod matching;
pub mod order_book;
pub mod order_gen;
pub mod pipeline;
pub mod report;
pub mod types;
pub mod validation;

pub use engine::Engine;
pub use execution::ExecutionEvent;
pub use matching::match_order;
pub use order_book::{BookSnapshot, OrderBook};
pub use order_gen::{replay_into_engine, Generator, GeneratorConfig};
pub use pipeline::{BatchSummary, OrderManager, PipelineConfig};
pub use report::{read_orders, write_snapshot, ReportError, ReportWriter};
pub use types::{Instrument, Order, OrderId, OrderRecord, OrderStatus, Side};
pub use validation::{validate, RejectReason};
