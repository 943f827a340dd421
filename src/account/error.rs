use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountError {
    /// Only raised when the account policy asks for amount validation.
    #[error("Invalid amount {amount} (must be positive)")]
    InvalidAmount { amount: Decimal },
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("`{lower}` must be lower than `{upper}`")]
    UnorderedLimits { lower: &'static str, upper: &'static str },

    #[error("Interest rates cannot be negative")]
    NegativeRate,

    #[error("Negative overdraft fee {0}")]
    NegativeFee(Decimal),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
