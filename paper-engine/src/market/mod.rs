//! Synthetic market data.
//!
//! Generates a believable, continuously evolving price for every
//! instrument in the universe without any external feed: each tick
//! applies a bounded random-walk perturbation to the last price.

use crate::models::Instrument;
use log::debug;
use rand::Rng;
use std::collections::BTreeMap;

/// Maximum per-tick drift as a fraction of the last price (0.25%),
/// approximating ~0.5% short-interval volatility.
pub const MAX_TICK_DRIFT: f64 = 0.0025;

/// Prices never walk below one paisa.
const MIN_PRICE: f64 = 0.01;

/// Source of the per-tick perturbation, injected so deterministic tests
/// can pin tick outputs while production uses real entropy.
pub trait NoiseSource: Send {
    /// A draw in [-1.0, 1.0], scaled by `MAX_TICK_DRIFT` per tick.
    fn next_unit(&mut self) -> f64;
}

/// Production noise: uniform draws from the thread-local RNG.
pub struct ThreadRngNoise;

impl NoiseSource for ThreadRngNoise {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen_range(-1.0..1.0)
    }
}

/// Replays a fixed cycle of draws. Test/scenario source.
pub struct FixedNoise {
    values: Vec<f64>,
    index: usize,
}

impl FixedNoise {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }
}

impl NoiseSource for FixedNoise {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}

/// No-op source: every tick leaves prices exactly where they were.
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn next_unit(&mut self) -> f64 {
        0.0
    }
}

/// Owns the live instrument table and walks it forward one tick at a
/// time. The only mutation path into instrument state.
pub struct MarketSimulator {
    instruments: BTreeMap<String, Instrument>,
    noise: Box<dyn NoiseSource>,
    ticks: u64,
}

impl MarketSimulator {
    pub fn new(universe: Vec<Instrument>, noise: Box<dyn NoiseSource>) -> Self {
        let instruments = universe
            .into_iter()
            .map(|instrument| (instrument.symbol().to_string(), instrument))
            .collect();
        Self {
            instruments,
            noise,
            ticks: 0,
        }
    }

    /// Advances every instrument by one bounded random-walk step and
    /// refreshes the derived intraday fields.
    pub fn tick(&mut self) {
        for instrument in self.instruments.values_mut() {
            let drift = self.noise.next_unit() * MAX_TICK_DRIFT;
            let new_price = (instrument.price() * (1.0 + drift)).max(MIN_PRICE);
            instrument.apply_price(new_price);
        }
        self.ticks += 1;
        debug!("market tick {} applied to {} instruments", self.ticks, self.instruments.len());
    }

    pub fn get(&self, symbol: &str) -> Option<&Instrument> {
        self.instruments.get(symbol)
    }

    pub fn price_of(&self, symbol: &str) -> Option<f64> {
        self.instruments.get(symbol).map(|i| i.price())
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.instruments.contains_key(symbol)
    }

    /// Snapshot of the live quote table, ordered by symbol.
    pub fn quotes(&self) -> Vec<Instrument> {
        self.instruments.values().cloned().collect()
    }

    /// Number of ticks applied since creation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Pin a price deterministically for test setup / scenario wiring.
    pub fn set_price(&mut self, symbol: &str, price: f64) {
        if let Some(instrument) = self.instruments.get_mut(symbol) {
            instrument.apply_price(price);
        }
    }
}

/// The fixed ten-stock NSE universe the simulator is seeded with.
pub fn default_universe() -> Vec<Instrument> {
    vec![
        Instrument::new("RELIANCE", "Reliance Industries", 2580.50, 2545.80, 2595.30, 2540.20, 12_500_000),
        Instrument::new("INFY", "Infosys Ltd", 1520.75, 1500.00, 1535.20, 1498.30, 8_900_000),
        Instrument::new("HDFCBANK", "HDFC Bank", 1720.30, 1738.50, 1745.60, 1715.20, 7_800_000),
        Instrument::new("TCS", "TCS", 3550.80, 3525.60, 3565.40, 3520.10, 4_500_000),
        Instrument::new("ICICIBANK", "ICICI Bank", 985.60, 975.20, 992.30, 972.40, 11_200_000),
        Instrument::new("SBIN", "State Bank of India", 625.40, 635.20, 638.90, 623.10, 15_600_000),
        Instrument::new("BHARTIARTL", "Bharti Airtel", 1125.90, 1112.30, 1132.50, 1110.40, 6_700_000),
        Instrument::new("HINDUNILVR", "Hindustan Unilever", 2450.20, 2442.00, 2465.80, 2438.90, 3_200_000),
        Instrument::new("ITC", "ITC Limited", 445.75, 442.50, 448.90, 441.30, 18_900_000),
        Instrument::new("WIPRO", "Wipro Limited", 425.30, 430.50, 432.10, 424.20, 7_200_000),
    ]
}
