//! Event payload shapes. These are contract surface for external
//! indexers; field removals or renames break downstream consumers.

use crate::domain::{Address, StarId};
use serde::{Deserialize, Serialize};

/// Published after `create_star` commits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarCreatedPayload {
    pub star_id: StarId,
    pub name: String,
    pub owner: Address,
}

/// Published after `put_up_for_sale` commits. Re-pricing an already
/// listed star publishes a fresh event with the new price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarListedPayload {
    pub star_id: StarId,
    pub price: u128,
    pub seller: Address,
}

/// Published after a purchase settles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleCompletedPayload {
    pub star_id: StarId,
    pub seller: Address,
    pub buyer: Address,
    /// The listed price the seller was credited.
    pub price: u128,
    /// Excess payment returned to the buyer. Zero on exact payment.
    pub refund: u128,
}

/// Published after a no-payment ownership transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarTransferredPayload {
    pub star_id: StarId,
    pub from: Address,
    pub to: Address,
}

/// Published after a bilateral exchange. Owners are post-swap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarsExchangedPayload {
    pub star_a: StarId,
    pub star_b: StarId,
    /// New owner of `star_a`.
    pub owner_a: Address,
    /// New owner of `star_b`.
    pub owner_b: Address,
}

/// Union of every event the registry publishes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    StarCreated(StarCreatedPayload),
    StarListed(StarListedPayload),
    SaleCompleted(SaleCompletedPayload),
    StarTransferred(StarTransferredPayload),
    StarsExchanged(StarsExchangedPayload),
}

impl RegistryEvent {
    /// The star id the event concerns (`star_a` for exchanges).
    pub fn star_id(&self) -> StarId {
        match self {
            Self::StarCreated(p) => p.star_id,
            Self::StarListed(p) => p.star_id,
            Self::SaleCompleted(p) => p.star_id,
            Self::StarTransferred(p) => p.star_id,
            Self::StarsExchanged(p) => p.star_a,
        }
    }
}
