//! Paper-trading simulation engine.
//!
//! In-memory core for a virtual trading session: a synthetic
//! random-walk market, an order engine over a virtual cash account and
//! position book, derived P&L views, and an append-only trade history.
//! State lives for the session only; nothing is persisted.

pub mod fees;
pub mod ledger;
pub mod market;
pub mod models;
pub mod session;
pub mod ticker;

pub use fees::{DeliveryFees, FeeBreakdown, FeeModel, FlatFee};
pub use ledger::{PortfolioSummary, PositionView};
pub use market::{
    default_universe, FixedNoise, MarketSimulator, NoiseSource, ThreadRngNoise, ZeroNoise,
};
pub use models::{
    Account, Instrument, OrderError, OrderRequest, OrderType, Position, PositionBook, Side,
    TradeRecord, TradeStatus,
};
pub use session::TradingSession;
pub use ticker::{spawn_ticker, TickerHandle};
