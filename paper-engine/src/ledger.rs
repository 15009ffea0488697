//! Derived position ledger.
//!
//! Pure functions of (position book, live prices, account): nothing
//! here is stored, everything is recomputed on demand after each tick.

use crate::market::MarketSimulator;
use crate::models::{Account, PositionBook};
use serde::Serialize;

/// An open position marked against the current simulated price.
#[derive(Debug, Clone, Serialize)]
pub struct PositionView {
    pub symbol: String,
    pub name: String,
    pub quantity: i64,
    pub average_cost: f64,
    pub current_price: f64,
    pub current_value: f64,
    pub invested_value: f64,
    pub unrealized_pnl: f64,
    pub unrealized_pnl_percent: f64,
}

/// Aggregates across cash and all open positions.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub cash_balance: f64,
    pub holdings_value: f64,
    pub total_portfolio_value: f64,
    pub total_unrealized_pnl: f64,
    /// Return on starting capital, in percent.
    pub total_return_percent: f64,
}

pub fn position_views(book: &PositionBook, market: &MarketSimulator) -> Vec<PositionView> {
    book.iter()
        .map(|(symbol, position)| {
            // Fall back to the entry cost if the symbol ever leaves the
            // simulated universe (it never does today).
            let quote = market.get(symbol);
            let current_price = quote.map(|q| q.price()).unwrap_or(position.average_cost());
            let name = quote.map(|q| q.name().to_string()).unwrap_or_else(|| symbol.clone());

            let current_value = current_price * position.quantity() as f64;
            let invested_value = position.invested_value();
            let unrealized_pnl = current_value - invested_value;
            let unrealized_pnl_percent = if invested_value != 0.0 {
                unrealized_pnl / invested_value * 100.0
            } else {
                0.0
            };

            PositionView {
                symbol: symbol.clone(),
                name,
                quantity: position.quantity(),
                average_cost: position.average_cost(),
                current_price,
                current_value,
                invested_value,
                unrealized_pnl,
                unrealized_pnl_percent,
            }
        })
        .collect()
}

pub fn summarize(account: &Account, book: &PositionBook, market: &MarketSimulator) -> PortfolioSummary {
    let views = position_views(book, market);
    let holdings_value: f64 = views.iter().map(|v| v.current_value).sum();
    let total_unrealized_pnl: f64 = views.iter().map(|v| v.unrealized_pnl).sum();
    let total_portfolio_value = account.cash_balance() + holdings_value;

    let starting = account.starting_capital();
    let total_return_percent = if starting != 0.0 {
        (total_portfolio_value - starting) / starting * 100.0
    } else {
        0.0
    };

    PortfolioSummary {
        cash_balance: account.cash_balance(),
        holdings_value,
        total_portfolio_value,
        total_unrealized_pnl,
        total_return_percent,
    }
}
