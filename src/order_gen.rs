//! Synthetic batch generator.
//!
//! Deterministic, configurable stream of raw order records for property
//! tests, demos, and benchmarks. Same seed ⇒ same batch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::engine::Engine;
use crate::execution::ExecutionEvent;
use crate::types::{Instrument, Order, OrderId, OrderRecord};
use crate::validation::validate;

/// Configuration for the synthetic batch generator.
/// All ranges are inclusive. Same config + seed produces the same stream.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// RNG seed. Same seed ⇒ same record stream.
    pub seed: u64,
    /// Number of records to generate when collecting the full batch.
    pub num_orders: usize,
    /// Probability of Buy (0.0..=1.0). Sell otherwise.
    pub buy_ratio: f64,
    /// Price range (inclusive), whole currency units.
    pub price_min: i64,
    pub price_max: i64,
    /// Quantity range in lots of ten: quantity = 10 * draw(lot_min..=lot_max).
    pub lot_min: i64,
    pub lot_max: i64,
    /// Probability of a deliberately invalid record (bad instrument,
    /// quantity, price, or side).
    pub invalid_ratio: f64,
    /// Instruments to draw from.
    pub instruments: Vec<Instrument>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            num_orders: 1000,
            buy_ratio: 0.5,
            price_min: 95,
            price_max: 105,
            lot_min: 1,
            lot_max: 10,
            invalid_ratio: 0.0,
            instruments: Instrument::ALL.to_vec(),
        }
    }
}

/// Deterministic record stream. Create with [`Generator::new`]; pull records
/// with [`Generator::next_record`] or collect the batch.
pub struct Generator {
    rng: StdRng,
    config: GeneratorConfig,
    next_order_id: u64,
}

impl Generator {
    /// Builds a generator with the given config. Same config (including seed)
    /// ⇒ same stream.
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            rng,
            config,
            next_order_id: 1,
        }
    }

    /// Generates the next record. Advances internal state (order id, RNG).
    pub fn next_record(&mut self) -> OrderRecord {
        let order_id = OrderId(self.next_order_id);
        self.next_order_id += 1;
        let client_order_id = format!("gen-{}", order_id.0);
        let idx = self.rng.gen_range(0..self.config.instruments.len());
        let instrument = self.config.instruments[idx].name().to_string();
        let side = if self.rng.gen::<f64>() < self.config.buy_ratio {
            1
        } else {
            2
        };
        let quantity = 10 * self.rng.gen_range(self.config.lot_min..=self.config.lot_max);
        let price = Decimal::from(
            self.rng
                .gen_range(self.config.price_min..=self.config.price_max),
        );

        let mut record = OrderRecord {
            order_id,
            client_order_id,
            instrument,
            side,
            quantity,
            price,
        };
        if self.rng.gen::<f64>() < self.config.invalid_ratio {
            self.corrupt(&mut record);
        }
        record
    }

    /// Makes exactly one field invalid so the validator has work to do.
    fn corrupt(&mut self, record: &mut OrderRecord) {
        match self.rng.gen_range(0..4) {
            0 => record.instrument = "Daisy".to_string(),
            1 => record.quantity += 5,
            2 => record.price = Decimal::ZERO,
            _ => record.side = 3,
        }
    }

    /// Returns a vector of exactly `n` records. Advances the generator state.
    pub fn take_records(&mut self, n: usize) -> Vec<OrderRecord> {
        (0..n).map(|_| self.next_record()).collect()
    }

    /// Returns the full batch as defined by `config.num_orders`.
    pub fn all_records(&mut self) -> Vec<OrderRecord> {
        self.take_records(self.config.num_orders)
    }
}

/// Replays raw records through validation and the engine, exactly as the
/// pipeline sequences them. Returns all emitted events, rejections included.
pub fn replay_into_engine(
    engine: &mut Engine,
    records: impl IntoIterator<Item = OrderRecord>,
) -> Vec<ExecutionEvent> {
    let mut events = Vec::new();
    for record in records {
        match validate(&record) {
            Ok((instrument, side)) => {
                let order = Order::from_record(&record, instrument, side);
                events.extend(engine.submit(order));
            }
            Err(reason) => events.push(ExecutionEvent::rejected(&record, reason)),
        }
    }
    events
}
