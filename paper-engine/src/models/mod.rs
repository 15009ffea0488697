pub mod account;
pub mod error;
pub mod instrument;
pub mod order;
pub mod position;

pub use account::*;
pub use error::*;
pub use instrument::*;
pub use order::*;
pub use position::*;

#[cfg(test)]
mod tests;
