use crate::fees::FeeBreakdown;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OrderType {
    Market,
    Limit(f64),
}

/// An instruction to buy or sell an instrument in the simulated market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    side: Side,
    symbol: String,
    quantity: i64,
    order_type: OrderType,
}

impl OrderRequest {
    pub fn new(side: Side, symbol: impl Into<String>, quantity: i64, order_type: OrderType) -> Self {
        Self {
            side,
            symbol: symbol.into(),
            quantity,
            order_type,
        }
    }

    pub fn market(side: Side, symbol: impl Into<String>, quantity: i64) -> Self {
        Self::new(side, symbol, quantity, OrderType::Market)
    }

    pub fn limit(side: Side, symbol: impl Into<String>, quantity: i64, limit_price: f64) -> Self {
        Self::new(side, symbol, quantity, OrderType::Limit(limit_price))
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }
}

/// Terminal state of an executed order. Rejected orders never produce a
/// record, so the only status a stored trade can carry is `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeStatus {
    Completed,
}

/// Immutable record of a completed execution, appended to the trade
/// history log and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    id: Uuid,
    side: Side,
    symbol: String,
    quantity: i64,
    price: f64,
    gross_amount: f64,
    charges: FeeBreakdown,
    net_amount: f64,
    realized_pnl: Option<f64>,
    timestamp: i64,
    status: TradeStatus,
}

impl TradeRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        side: Side,
        symbol: impl Into<String>,
        quantity: i64,
        price: f64,
        gross_amount: f64,
        charges: FeeBreakdown,
        net_amount: f64,
        realized_pnl: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            side,
            symbol: symbol.into(),
            quantity,
            price,
            gross_amount,
            charges,
            net_amount,
            realized_pnl,
            timestamp: chrono::Utc::now().timestamp_millis(),
            status: TradeStatus::Completed,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Price the order actually filled at.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn gross_amount(&self) -> f64 {
        self.gross_amount
    }

    pub fn charges(&self) -> &FeeBreakdown {
        &self.charges
    }

    /// Net cash impact: debit for buys, credit for sells.
    pub fn net_amount(&self) -> f64 {
        self.net_amount
    }

    /// Profit locked in by a sell, net of charges. `None` on buys.
    pub fn realized_pnl(&self) -> Option<f64> {
        self.realized_pnl
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn status(&self) -> TradeStatus {
        self.status
    }
}
