//! Registry error types.
//!
//! Every variant is caller-recoverable: the caller may retry with
//! corrected arguments. A failed call leaves all registry state exactly as
//! it was before the call.

use super::entities::StarId;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Star id already exists: {0}")]
    DuplicateIdentifier(StarId),

    #[error("Star ids must be positive")]
    InvalidIdentifier,

    #[error("Star not found: {0}")]
    StarNotFound(StarId),

    #[error("Caller is not the owner of star {0}")]
    NotOwner(StarId),

    #[error("Star is not for sale: {0}")]
    NotForSale(StarId),

    #[error("Insufficient payment: required {required}, attached {attached}")]
    InsufficientPayment { required: u128, attached: u128 },

    #[error("Listing price {price} is below the configured minimum {minimum}")]
    PriceBelowMinimum { price: u128, minimum: u128 },

    #[error("Operation does not accept payment, but {attached} was attached")]
    UnexpectedPayment { attached: u128 },

    #[error("Payment settlement failed: {0}")]
    SettlementFailed(#[from] SettlementError),
}

/// Errors surfaced by a settlement backend.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SettlementError {
    #[error("Crediting account would overflow its balance")]
    BalanceOverflow,

    #[error("Account cannot receive funds")]
    AccountUnavailable,

    #[error("Settlement backend error: {0}")]
    Backend(String),
}
