use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An open holding: quantity plus weighted-average entry cost.
///
/// Invariant: `quantity > 0` for as long as the position exists. A
/// position that reaches zero quantity is removed from the book rather
/// than retained as an empty entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    symbol: String,
    quantity: i64,
    average_cost: f64,
}

impl Position {
    pub fn new(symbol: impl Into<String>, quantity: i64, average_cost: f64) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            average_cost,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn average_cost(&self) -> f64 {
        self.average_cost
    }

    pub fn invested_value(&self) -> f64 {
        self.average_cost * self.quantity as f64
    }
}

/// The set of open positions, keyed by symbol.
///
/// BTreeMap keeps iteration order stable for views and tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionBook {
    holdings: BTreeMap<String, Position>,
}

impl PositionBook {
    pub fn get(&self, symbol: &str) -> Option<&Position> {
        self.holdings.get(symbol)
    }

    /// Held quantity for a symbol, zero when there is no position.
    pub fn quantity_of(&self, symbol: &str) -> i64 {
        self.holdings.get(symbol).map(|p| p.quantity).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, Position> {
        self.holdings.iter()
    }

    /// Records a buy fill, blending the average cost:
    /// `(old_qty * old_avg + qty * price) / (old_qty + qty)`.
    pub(crate) fn apply_buy(&mut self, symbol: &str, quantity: i64, price: f64) {
        match self.holdings.get_mut(symbol) {
            Some(position) => {
                let old_qty = position.quantity as f64;
                let new_qty = old_qty + quantity as f64;
                position.average_cost =
                    (position.average_cost * old_qty + price * quantity as f64) / new_qty;
                position.quantity += quantity;
            }
            None => {
                self.holdings
                    .insert(symbol.to_string(), Position::new(symbol, quantity, price));
            }
        }
    }

    /// Records a sell fill. The caller has already verified the held
    /// quantity covers the sale; a position that reaches zero is
    /// removed entirely.
    pub(crate) fn apply_sell(&mut self, symbol: &str, quantity: i64) {
        if let Some(position) = self.holdings.get_mut(symbol) {
            position.quantity -= quantity;
            if position.quantity <= 0 {
                self.holdings.remove(symbol);
            }
        }
    }
}
