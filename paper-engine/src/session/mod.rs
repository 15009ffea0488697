//! The trading session: the order engine plus all state it mutates.

use crate::fees::{DeliveryFees, FeeBreakdown, FeeModel};
use crate::ledger::{self, PortfolioSummary, PositionView};
use crate::market::{default_universe, MarketSimulator, ThreadRngNoise};
use crate::models::{
    Account, Instrument, OrderError, OrderRequest, OrderType, PositionBook, Side, TradeRecord,
};
use log::{info, warn};

/// Owns the simulated market, the virtual account, the position book
/// and the trade history for one user session. `submit_order` is the
/// sole mutation path into account and position state; `tick` is the
/// sole mutation path into instrument state. Nothing here survives the
/// session.
pub struct TradingSession {
    market: MarketSimulator,
    account: Account,
    positions: PositionBook,
    history: Vec<TradeRecord>,
    fees: Box<dyn FeeModel>,
}

impl TradingSession {
    pub fn new(starting_capital: f64, market: MarketSimulator, fees: Box<dyn FeeModel>) -> Self {
        Self {
            market,
            account: Account::new(starting_capital),
            positions: PositionBook::default(),
            history: Vec::new(),
            fees,
        }
    }

    /// Default setup: 100,000 virtual cash, the standard universe,
    /// entropy-driven ticks and the delivery charge schedule.
    pub fn with_defaults() -> Self {
        Self::new(
            100_000.0,
            MarketSimulator::new(default_universe(), Box::new(ThreadRngNoise)),
            Box::new(DeliveryFees),
        )
    }

    /// Advances the simulated market by one step.
    pub fn tick(&mut self) {
        self.market.tick();
    }

    /// Validates, prices and settles an order in one synchronous pass.
    /// A rejection leaves every piece of session state untouched.
    pub fn submit_order(&mut self, request: OrderRequest) -> Result<TradeRecord, OrderError> {
        if request.quantity() <= 0 {
            warn!("order rejected: non-positive quantity {}", request.quantity());
            return Err(OrderError::InvalidQuantity);
        }
        if let OrderType::Limit(limit_price) = request.order_type() {
            if limit_price <= 0.0 {
                warn!("order rejected: non-positive limit price {}", limit_price);
                return Err(OrderError::InvalidLimitPrice);
            }
        }

        let market_price = self
            .market
            .price_of(request.symbol())
            .ok_or_else(|| OrderError::UnknownSymbol(request.symbol().to_string()))?;

        let price = Self::resolve_price(&request, market_price);
        let gross = price * request.quantity() as f64;
        let charges = self.fees.charges(request.side(), gross);

        let record = match request.side() {
            Side::Buy => self.settle_buy(&request, price, gross, charges)?,
            Side::Sell => self.settle_sell(&request, price, gross, charges)?,
        };

        info!(
            "{} {} x{} filled @ {:.2}, net {:.2}, cash {:.2}",
            record.side(),
            record.symbol(),
            record.quantity(),
            record.price(),
            record.net_amount(),
            self.account.cash_balance()
        );

        self.history.push(record.clone());
        Ok(record)
    }

    /// Every order fills immediately. Limit orders fill with price
    /// improvement: a buy never pays more than its limit, a sell never
    /// receives less.
    fn resolve_price(request: &OrderRequest, market_price: f64) -> f64 {
        match request.order_type() {
            OrderType::Market => market_price,
            OrderType::Limit(limit_price) => match request.side() {
                Side::Buy => limit_price.min(market_price),
                Side::Sell => limit_price.max(market_price),
            },
        }
    }

    fn settle_buy(
        &mut self,
        request: &OrderRequest,
        price: f64,
        gross: f64,
        charges: FeeBreakdown,
    ) -> Result<TradeRecord, OrderError> {
        let net = gross + charges.total();
        if net > self.account.cash_balance() {
            warn!(
                "buy rejected: needs {:.2}, available {:.2}",
                net,
                self.account.cash_balance()
            );
            return Err(OrderError::InsufficientFunds {
                required: net,
                available: self.account.cash_balance(),
            });
        }

        self.account.debit(net);
        self.positions
            .apply_buy(request.symbol(), request.quantity(), price);

        Ok(TradeRecord::new(
            Side::Buy,
            request.symbol(),
            request.quantity(),
            price,
            gross,
            charges,
            net,
            None,
        ))
    }

    fn settle_sell(
        &mut self,
        request: &OrderRequest,
        price: f64,
        gross: f64,
        charges: FeeBreakdown,
    ) -> Result<TradeRecord, OrderError> {
        let held = self.positions.quantity_of(request.symbol());
        if held < request.quantity() {
            warn!(
                "sell rejected: requested {} of {}, held {}",
                request.quantity(),
                request.symbol(),
                held
            );
            return Err(OrderError::InsufficientShares {
                requested: request.quantity(),
                held,
            });
        }

        // `held >= quantity > 0` guarantees the position exists.
        let average_cost = self
            .positions
            .get(request.symbol())
            .map(|p| p.average_cost())
            .unwrap_or(0.0);

        let total_charges = charges.total();
        let net = gross - total_charges;
        let realized = (price - average_cost) * request.quantity() as f64 - total_charges;

        self.account.credit(net);
        self.positions.apply_sell(request.symbol(), request.quantity());

        Ok(TradeRecord::new(
            Side::Sell,
            request.symbol(),
            request.quantity(),
            price,
            gross,
            charges,
            net,
            Some(realized),
        ))
    }

    /// Open positions marked against live prices.
    pub fn positions(&self) -> Vec<PositionView> {
        ledger::position_views(&self.positions, &self.market)
    }

    /// Cash plus holdings, unrealized P&L and return on starting capital.
    pub fn summary(&self) -> PortfolioSummary {
        ledger::summarize(&self.account, &self.positions, &self.market)
    }

    /// Full trade history, newest first.
    pub fn trade_history(&self) -> Vec<TradeRecord> {
        self.history.iter().rev().cloned().collect()
    }

    /// Trade history restricted to one side, newest first.
    pub fn trade_history_for(&self, side: Side) -> Vec<TradeRecord> {
        self.history
            .iter()
            .rev()
            .filter(|record| record.side() == side)
            .cloned()
            .collect()
    }

    /// Live quote table, ordered by symbol.
    pub fn quotes(&self) -> Vec<Instrument> {
        self.market.quotes()
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn market(&self) -> &MarketSimulator {
        &self.market
    }

    /// Pin a price deterministically for test setup / scenario wiring.
    pub fn set_price(&mut self, symbol: &str, price: f64) {
        self.market.set_price(symbol, price);
    }
}
