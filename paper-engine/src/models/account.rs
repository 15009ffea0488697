use serde::{Deserialize, Serialize};

/// The single virtual cash account backing a trading session.
///
/// `starting_capital` is fixed at creation and only used for the
/// session-return calculation; every executed order moves
/// `cash_balance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    cash_balance: f64,
    starting_capital: f64,
}

impl Account {
    pub fn new(starting_capital: f64) -> Self {
        Self {
            cash_balance: starting_capital,
            starting_capital,
        }
    }

    pub fn cash_balance(&self) -> f64 {
        self.cash_balance
    }

    pub fn starting_capital(&self) -> f64 {
        self.starting_capital
    }

    /// Caller must have checked affordability; the order engine is the
    /// only mutation path and never debits past zero.
    pub(crate) fn debit(&mut self, amount: f64) {
        self.cash_balance -= amount;
    }

    pub(crate) fn credit(&mut self, amount: f64) {
        self.cash_balance += amount;
    }
}
