//! Transaction-charge schedules.
//!
//! A session is constructed with exactly one `FeeModel` and applies it
//! to every order, so net amounts stay consistent across all views.

use crate::models::Side;
use serde::{Deserialize, Serialize};

/// Itemized charges for a single execution. Components that a schedule
/// does not levy stay at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub brokerage: f64,
    pub stt: f64,
    pub stamp_duty: f64,
    pub exchange_charges: f64,
    pub sebi_charges: f64,
    pub gst: f64,
    pub dp_charges: f64,
}

impl FeeBreakdown {
    pub fn total(&self) -> f64 {
        self.brokerage
            + self.stt
            + self.stamp_duty
            + self.exchange_charges
            + self.sebi_charges
            + self.gst
            + self.dp_charges
    }
}

/// Computes the charges for an order given its side and gross notional.
pub trait FeeModel: Send {
    fn charges(&self, side: Side, gross: f64) -> FeeBreakdown;
}

/// Flat percentage-of-gross charge, the basic simulator model.
pub struct FlatFee {
    rate: f64,
}

impl FlatFee {
    /// `rate` is a fraction of gross notional, e.g. 0.001 for 0.1%.
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl Default for FlatFee {
    fn default() -> Self {
        Self::new(0.001)
    }
}

impl FeeModel for FlatFee {
    fn charges(&self, _side: Side, gross: f64) -> FeeBreakdown {
        FeeBreakdown {
            brokerage: gross * self.rate,
            ..FeeBreakdown::default()
        }
    }
}

/// Indian equity delivery schedule: zero brokerage, STT on sells, stamp
/// duty on buys, exchange and SEBI charges on both sides, GST on the
/// fee components, and a flat depository charge per sell.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryFees;

impl DeliveryFees {
    const STT_RATE: f64 = 0.001; // 0.1% of sell value
    const STAMP_DUTY_RATE: f64 = 0.00015; // 0.015% of buy value
    const EXCHANGE_RATE: f64 = 0.0000345; // NSE 0.00345%
    const SEBI_RATE: f64 = 0.0000001;
    const SEBI_MIN: f64 = 0.01;
    const GST_RATE: f64 = 0.18;
    const DP_CHARGE: f64 = 15.75; // flat per sell
}

impl FeeModel for DeliveryFees {
    fn charges(&self, side: Side, gross: f64) -> FeeBreakdown {
        let brokerage = 0.0;
        let stt = match side {
            Side::Sell => gross * Self::STT_RATE,
            Side::Buy => 0.0,
        };
        let stamp_duty = match side {
            Side::Buy => gross * Self::STAMP_DUTY_RATE,
            Side::Sell => 0.0,
        };
        let exchange_charges = gross * Self::EXCHANGE_RATE;
        let sebi_charges = (gross * Self::SEBI_RATE).max(Self::SEBI_MIN);
        // GST applies to the fee components, not the statutory taxes.
        let gst = (brokerage + exchange_charges + sebi_charges) * Self::GST_RATE;
        let dp_charges = match side {
            Side::Sell => Self::DP_CHARGE,
            Side::Buy => 0.0,
        };

        FeeBreakdown {
            brokerage,
            stt,
            stamp_duty,
            exchange_charges,
            sebi_charges,
            gst,
            dp_charges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_fee_is_rate_times_gross() {
        let model = FlatFee::new(0.001);

        let buy = model.charges(Side::Buy, 25805.0);
        assert!(
            (buy.total() - 25.805).abs() < 1e-9,
            "Flat charge mismatch: {}",
            buy.total()
        );

        // Side does not matter for the flat model.
        let sell = model.charges(Side::Sell, 25805.0);
        assert_eq!(buy, sell);
    }

    #[test]
    fn test_delivery_buy_components() {
        let fees = DeliveryFees.charges(Side::Buy, 10000.0);

        assert_eq!(fees.brokerage, 0.0);
        assert_eq!(fees.stt, 0.0, "No STT on delivery buys");
        assert!((fees.stamp_duty - 1.5).abs() < 1e-9);
        assert!((fees.exchange_charges - 0.345).abs() < 1e-9);
        assert!((fees.sebi_charges - 0.01).abs() < 1e-9, "SEBI floor applies");
        assert!((fees.gst - (0.345 + 0.01) * 0.18).abs() < 1e-9);
        assert_eq!(fees.dp_charges, 0.0);
    }

    #[test]
    fn test_delivery_sell_components() {
        let fees = DeliveryFees.charges(Side::Sell, 10000.0);

        assert!((fees.stt - 10.0).abs() < 1e-9);
        assert_eq!(fees.stamp_duty, 0.0, "No stamp duty on sells");
        assert!((fees.dp_charges - 15.75).abs() < 1e-9);
        assert!(
            (fees.total() - (10.0 + 0.345 + 0.01 + (0.345 + 0.01) * 0.18 + 15.75)).abs() < 1e-9,
            "Sell total mismatch: {}",
            fees.total()
        );
    }

    #[test]
    fn test_sebi_floor_on_small_orders() {
        let fees = DeliveryFees.charges(Side::Buy, 100.0);
        assert!((fees.sebi_charges - 0.01).abs() < 1e-12);
    }
}
