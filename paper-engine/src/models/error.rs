use thiserror::Error;

/// Why an order was rejected. All variants are synchronous, recoverable
/// and leave session state untouched; the caller corrects the request
/// and resubmits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    #[error("quantity must be a positive whole number of shares")]
    InvalidQuantity,

    #[error("limit price must be positive")]
    InvalidLimitPrice,

    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("insufficient funds: order needs {required:.2} but only {available:.2} is available")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("insufficient shares: tried to sell {requested} but only {held} held")]
    InsufficientShares { requested: i64, held: i64 },
}
