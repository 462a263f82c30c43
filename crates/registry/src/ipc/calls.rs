//! Request/response payloads for the registry call surface.
//!
//! ## Context-Only Identity
//!
//! NO caller fields in payloads. The authenticated caller and attached
//! value arrive in `CallContext`, filled in by the transaction layer.
//! `new_owner` and similar fields are operation arguments, not identities.
//!
//! ## Correlation IDs
//!
//! Every request/response pair carries a `correlation_id` so the
//! transaction layer can match replies to in-flight submissions.

use crate::domain::{Address, SaleReceipt, StarId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-call context supplied by the external transaction layer.
///
/// `attached_value` is denominated in the host's smallest native unit and
/// has already been collected from the caller before the registry runs;
/// the registry only decides where it goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// Authenticated caller identity.
    pub caller: Address,
    /// Native value attached to the call. Zero for all operations except
    /// purchases.
    pub attached_value: u128,
}

impl CallContext {
    /// Context for a call with no attached value.
    pub fn new(caller: Address) -> Self {
        Self {
            caller,
            attached_value: 0,
        }
    }

    /// Context for a payable call.
    pub fn with_value(caller: Address, attached_value: u128) -> Self {
        Self {
            caller,
            attached_value,
        }
    }
}

// =============================================================================
// MUTATING CALLS
// =============================================================================

/// Register a new star owned by the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateStarRequest {
    pub correlation_id: Uuid,
    pub star_id: StarId,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateStarResponse {
    pub correlation_id: Uuid,
    pub star_id: StarId,
}

/// List a star for sale at a fixed price. Replaces any existing listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListStarRequest {
    pub correlation_id: Uuid,
    pub star_id: StarId,
    pub price: u128,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListStarResponse {
    pub correlation_id: Uuid,
    pub star_id: StarId,
    pub price: u128,
}

/// Purchase a listed star. The payment rides in
/// `CallContext::attached_value`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuyStarRequest {
    pub correlation_id: Uuid,
    pub star_id: StarId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuyStarResponse {
    pub correlation_id: Uuid,
    pub receipt: SaleReceipt,
}

/// Reassign a star to a new owner without payment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransferStarRequest {
    pub correlation_id: Uuid,
    pub star_id: StarId,
    pub new_owner: Address,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransferStarResponse {
    pub correlation_id: Uuid,
    pub star_id: StarId,
    pub previous_owner: Address,
    pub new_owner: Address,
}

/// Swap ownership of two stars. The caller must own at least one side.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeStarsRequest {
    pub correlation_id: Uuid,
    pub star_a: StarId,
    pub star_b: StarId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeStarsResponse {
    pub correlation_id: Uuid,
    pub star_a: StarId,
    pub star_b: StarId,
    /// New owner of `star_a`.
    pub owner_a: Address,
    /// New owner of `star_b`.
    pub owner_b: Address,
}

// =============================================================================
// READ-ONLY QUERIES
// =============================================================================

/// Look up a star's name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LookUpStarRequest {
    pub correlation_id: Uuid,
    pub star_id: StarId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LookUpStarResponse {
    pub correlation_id: Uuid,
    pub star_id: StarId,
    pub name: String,
}

/// Get a star's current owner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StarOwnerRequest {
    pub correlation_id: Uuid,
    pub star_id: StarId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StarOwnerResponse {
    pub correlation_id: Uuid,
    pub star_id: StarId,
    pub owner: Address,
}

/// Get a star's active asking price, if listed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SalePriceRequest {
    pub correlation_id: Uuid,
    pub star_id: StarId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SalePriceResponse {
    pub correlation_id: Uuid,
    pub star_id: StarId,
    /// `None` when the star is not for sale.
    pub price: Option<u128>,
}

/// Get the registry's fixed display name and symbol.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryInfoRequest {
    pub correlation_id: Uuid,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryInfoResponse {
    pub correlation_id: Uuid,
    pub name: String,
    pub symbol: String,
}
