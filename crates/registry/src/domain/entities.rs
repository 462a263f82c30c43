//! # Domain Entities for the Star Registry
//!
//! Core data structures for records, listings, and settlement.
//!
//! ## Type Decisions
//!
//! - `price: u128` - Amounts are denominated in the host's smallest native
//!   unit. u128 covers all practical values while avoiding a big-integer
//!   dependency and its arithmetic overhead.
//! - `StarId: u64` - Star ids are caller-assigned positive integers. Zero
//!   is reserved as invalid so hosts mapping onto unsigned defaults can
//!   never confuse "absent" with a real record.

use serde::{Deserialize, Serialize};

/// Authenticated caller/owner identity, supplied by the external
/// transaction layer. 20 bytes, matching host-chain account addresses.
pub type Address = [u8; 20];

/// Unique identifier of a star record. Assigned by the creator, never
/// reused, never mutated.
pub type StarId = u64;

/// One registered star.
///
/// A star is created once and never destroyed for the life of the
/// registry. `id` and `name` are immutable after creation; `owner` changes
/// only through transfer, exchange, or sale settlement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    /// Caller-assigned positive identifier.
    pub id: StarId,
    /// Opaque display string, stored verbatim.
    pub name: String,
    /// Current owner of record. Exactly one at all times.
    pub owner: Address,
}

/// A single credit instruction produced by sale settlement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    /// Account to credit.
    pub account: Address,
    /// Amount in smallest native units.
    pub amount: u128,
}

/// The complete payment side of one sale, applied all-or-nothing.
///
/// Holds the seller's credit (exactly the listed price) and, when the
/// buyer overpaid, the refund of the excess. Zero-amount credits are never
/// included.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Credits to apply. Either all succeed or none do.
    pub credits: Vec<Credit>,
}

impl Settlement {
    /// Builds the settlement for a sale: seller receives `price`, buyer is
    /// refunded `attached - price` when positive.
    pub fn for_sale(seller: Address, buyer: Address, price: u128, attached: u128) -> Self {
        let mut credits = Vec::with_capacity(2);
        if price > 0 {
            credits.push(Credit {
                account: seller,
                amount: price,
            });
        }
        let refund = attached.saturating_sub(price);
        if refund > 0 {
            credits.push(Credit {
                account: buyer,
                amount: refund,
            });
        }
        Self { credits }
    }
}

/// Outcome of a successful purchase, returned to the caller and mirrored
/// in the `SaleCompleted` event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleReceipt {
    /// The star that changed hands.
    pub star_id: StarId,
    /// Previous owner, credited with exactly the listed price.
    pub seller: Address,
    /// New owner.
    pub buyer: Address,
    /// The listed price that was paid.
    pub price: u128,
    /// Excess of the attached payment over the price, returned to the buyer.
    pub refund: u128,
}

/// Immutable registry configuration, set once at construction.
///
/// `name` and `symbol` are the registry's fixed display constants, read
/// thereafter by all callers. There is no reinitialization path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Fixed display name of the registry.
    pub name: String,
    /// Fixed short symbol of the registry.
    pub symbol: String,
    /// Lowest price a listing may carry. Zero accepts any non-negative
    /// price, including free listings.
    pub min_listing_price: u128,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            name: "Star Notary Token".to_string(),
            symbol: "SNT".to_string(),
            min_listing_price: 0,
        }
    }
}

impl RegistryConfig {
    /// Configuration with custom display constants and a zero price floor.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            min_listing_price: 0,
        }
    }

    /// Builder method to set the listing price floor.
    pub fn with_min_listing_price(mut self, minimum: u128) -> Self {
        self.min_listing_price = minimum;
        self
    }
}
