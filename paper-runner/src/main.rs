//! Demo driver for the paper-trading engine.
//!
//! Seeds a session, runs the live ticker for a few intervals, places a
//! scripted set of orders against the moving market, then stops the
//! ticker and prints the resulting portfolio and trade history.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use paper_engine::{
    default_universe, spawn_ticker, DeliveryFees, FeeModel, FlatFee, MarketSimulator, OrderRequest,
    Side, ThreadRngNoise, TradingSession,
};
use serde_json::json;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FeeChoice {
    /// Flat 0.1% of gross notional.
    Flat,
    /// Itemized equity delivery schedule (STT, stamp duty, GST, ...).
    Delivery,
}

#[derive(Parser, Debug)]
#[command(version, about = "Paper-trading demo session")]
struct Args {
    /// Virtual starting capital.
    #[arg(long, default_value_t = 100_000.0)]
    starting_cash: f64,

    /// Milliseconds between simulated market ticks.
    #[arg(long, default_value_t = 5000)]
    tick_ms: u64,

    /// Ticks to let the market run before the scripted trades.
    #[arg(long, default_value_t = 2)]
    warmup_ticks: u64,

    /// Charge schedule applied to every order in the session.
    #[arg(long, value_enum, default_value = "delivery")]
    fees: FeeChoice,

    /// Print the final session state as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let fees: Box<dyn FeeModel> = match args.fees {
        FeeChoice::Flat => Box::new(FlatFee::default()),
        FeeChoice::Delivery => Box::new(DeliveryFees),
    };
    let market = MarketSimulator::new(default_universe(), Box::new(ThreadRngNoise));
    let session = Arc::new(Mutex::new(TradingSession::new(
        args.starting_cash,
        market,
        fees,
    )));

    let ticker = spawn_ticker(session.clone(), Duration::from_millis(args.tick_ms));
    info!("market ticker started at {}ms intervals", args.tick_ms);

    tokio::time::sleep(Duration::from_millis(args.tick_ms * args.warmup_ticks)).await;

    let script = [
        OrderRequest::market(Side::Buy, "RELIANCE", 10),
        OrderRequest::market(Side::Buy, "INFY", 20),
        OrderRequest::limit(Side::Buy, "TCS", 2, 3600.0),
        OrderRequest::market(Side::Sell, "RELIANCE", 4),
    ];
    for request in script {
        let mut session = session
            .lock()
            .map_err(|_| anyhow!("session lock poisoned"))?;
        match session.submit_order(request.clone()) {
            Ok(record) => info!(
                "{} {} x{} @ {:.2} (net {:.2})",
                record.side(),
                record.symbol(),
                record.quantity(),
                record.price(),
                record.net_amount()
            ),
            Err(err) => warn!(
                "{} {} x{} rejected: {}",
                request.side(),
                request.symbol(),
                request.quantity(),
                err
            ),
        }
    }

    // Let the market drift so the open positions show unrealized P&L.
    tokio::time::sleep(Duration::from_millis(args.tick_ms)).await;
    ticker.stop().await;

    let session = session
        .lock()
        .map_err(|_| anyhow!("session lock poisoned"))?;

    if args.json {
        let snapshot = json!({
            "summary": session.summary(),
            "positions": session.positions(),
            "history": session.trade_history(),
        });
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("\nWatchlist");
    println!(
        "{:<12} {:<22} {:>10} {:>9} {:>8}",
        "Symbol", "Name", "Price", "Change", "Chg%"
    );
    for quote in session.quotes() {
        println!(
            "{:<12} {:<22} {:>10.2} {:>+9.2} {:>+7.2}%",
            quote.symbol(),
            quote.name(),
            quote.price(),
            quote.change(),
            quote.change_percent()
        );
    }

    println!("\nPositions");
    println!(
        "{:<12} {:>6} {:>10} {:>10} {:>11} {:>8}",
        "Symbol", "Qty", "Avg Cost", "Price", "Unreal P&L", "P&L%"
    );
    for view in session.positions() {
        println!(
            "{:<12} {:>6} {:>10.2} {:>10.2} {:>+11.2} {:>+7.2}%",
            view.symbol,
            view.quantity,
            view.average_cost,
            view.current_price,
            view.unrealized_pnl,
            view.unrealized_pnl_percent
        );
    }

    println!("\nTrade history (newest first)");
    for record in session.trade_history() {
        match record.realized_pnl() {
            Some(realized) => println!(
                "{} {:<12} x{:<5} @ {:>10.2}  net {:>12.2}  realized {:>+10.2}",
                record.side(),
                record.symbol(),
                record.quantity(),
                record.price(),
                record.net_amount(),
                realized
            ),
            None => println!(
                "{}  {:<12} x{:<5} @ {:>10.2}  net {:>12.2}",
                record.side(),
                record.symbol(),
                record.quantity(),
                record.price(),
                record.net_amount()
            ),
        }
    }

    let summary = session.summary();
    println!("\nSummary");
    println!("  Cash balance        {:>14.2}", summary.cash_balance);
    println!("  Holdings value      {:>14.2}", summary.holdings_value);
    println!("  Portfolio value     {:>14.2}", summary.total_portfolio_value);
    println!("  Unrealized P&L      {:>+14.2}", summary.total_unrealized_pnl);
    println!("  Session return      {:>+13.2}%", summary.total_return_percent);

    Ok(())
}
