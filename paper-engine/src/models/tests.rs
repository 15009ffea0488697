use super::*;

#[test]
fn test_position_book_weighted_average() {
    let mut book = PositionBook::default();

    book.apply_buy("RELIANCE", 10, 2580.50);
    book.apply_buy("RELIANCE", 20, 2650.00);

    let position = book.get("RELIANCE").unwrap();
    assert_eq!(position.quantity(), 30);

    let expected = (10.0 * 2580.50 + 20.0 * 2650.00) / 30.0;
    assert!(
        (position.average_cost() - expected).abs() < 1e-9,
        "Average cost mismatch: {} vs {}",
        position.average_cost(),
        expected
    );
}

#[test]
fn test_position_book_removes_at_zero() {
    let mut book = PositionBook::default();
    book.apply_buy("INFY", 5, 1520.75);

    book.apply_sell("INFY", 2);
    assert_eq!(book.quantity_of("INFY"), 3);

    book.apply_sell("INFY", 3);
    assert!(
        book.get("INFY").is_none(),
        "Zero-quantity position must not remain in the book"
    );
    assert!(book.is_empty());
}

#[test]
fn test_quantity_of_unknown_symbol_is_zero() {
    let book = PositionBook::default();
    assert_eq!(book.quantity_of("TCS"), 0);
}

#[test]
fn test_account_debit_credit() {
    let mut account = Account::new(100_000.0);
    assert_eq!(account.cash_balance(), 100_000.0);
    assert_eq!(account.starting_capital(), 100_000.0);

    account.debit(25_830.805);
    account.credit(1_000.0);
    assert!((account.cash_balance() - 74_169.195 - 1_000.0).abs() < 1e-9);
    assert_eq!(
        account.starting_capital(),
        100_000.0,
        "Starting capital is constant"
    );
}

#[test]
fn test_instrument_derived_fields() {
    let mut instrument =
        Instrument::new("RELIANCE", "Reliance Industries", 2580.50, 2545.80, 2595.30, 2540.20, 1);
    assert!((instrument.change() - 34.70).abs() < 1e-9);

    instrument.apply_price(2600.0);
    assert!((instrument.change() - 54.20).abs() < 1e-9);
    assert!((instrument.change_percent() - 54.20 / 2545.80 * 100.0).abs() < 1e-9);
    assert!((instrument.high() - 2600.0).abs() < 1e-9, "High extends past 2595.30");
    assert!((instrument.low() - 2540.20).abs() < 1e-9, "Low untouched by an up move");
}

#[test]
fn test_trade_record_serialization() {
    let record = TradeRecord::new(
        Side::Buy,
        "RELIANCE",
        10,
        2580.50,
        25805.0,
        crate::fees::FeeBreakdown::default(),
        25805.0,
        None,
    );

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"side\":\"Buy\""));
    assert!(json.contains("\"symbol\":\"RELIANCE\""));
    assert!(json.contains("\"status\":\"Completed\""));
}
