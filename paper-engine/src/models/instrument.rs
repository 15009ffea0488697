use serde::{Deserialize, Serialize};

/// A tradable symbol with a simulated live quote.
///
/// Seeded once at session start and mutated in place by the market
/// simulator; instruments are never removed from the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    symbol: String,
    name: String,
    price: f64,
    change: f64,
    change_percent: f64,
    open: f64,
    high: f64,
    low: f64,
    volume: u64,
}

impl Instrument {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        open: f64,
        high: f64,
        low: f64,
        volume: u64,
    ) -> Self {
        let change = price - open;
        let change_percent = if open != 0.0 {
            change / open * 100.0
        } else {
            0.0
        };
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            change,
            change_percent,
            open,
            high,
            low,
            volume,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last traded (simulated) price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Absolute move since the open.
    pub fn change(&self) -> f64 {
        self.change
    }

    pub fn change_percent(&self) -> f64 {
        self.change_percent
    }

    pub fn open(&self) -> f64 {
        self.open
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn volume(&self) -> u64 {
        self.volume
    }

    /// Applies a new last price, refreshing the derived intraday fields.
    pub(crate) fn apply_price(&mut self, new_price: f64) {
        self.price = new_price;
        self.change = new_price - self.open;
        self.change_percent = if self.open != 0.0 {
            self.change / self.open * 100.0
        } else {
            0.0
        };
        if new_price > self.high {
            self.high = new_price;
        }
        if new_price < self.low {
            self.low = new_price;
        }
    }
}
