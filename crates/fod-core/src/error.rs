//! Error types for the core game model.

use thiserror::Error;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by shop transactions and persistence.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The index does not address an entry of the slate or inventory.
    #[error("index {index} is out of range (valid: 0..{len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the sequence that was indexed.
        len: usize,
    },

    /// The slate entry has no price and cannot be bought.
    #[error("{0} has no price set")]
    PriceUnset(String),

    /// Not enough gold to cover the price.
    #[error("Insufficient funds: {price} gold needed, {gold} gold available")]
    InsufficientFunds {
        /// Price of the item.
        price: u32,
        /// Gold the player holds.
        gold: u32,
    },

    /// Reading or writing a save file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A save file could not be encoded or decoded.
    #[error("invalid save data: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_mention_the_problem() {
        let err = CoreError::IndexOutOfRange { index: 99, len: 2 };
        assert!(err.to_string().contains("out of range"));

        let err = CoreError::InsufficientFunds { price: 5, gold: 0 };
        assert!(err.to_string().starts_with("Insufficient"));
    }
}
