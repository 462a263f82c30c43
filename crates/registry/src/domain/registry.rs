//! # Star Registry - Records, Listings, and the Five Mutations
//!
//! Implements the core marketplace state machine.
//!
//! ## Data Structures
//!
//! - `stars`: O(1) lookup by star id, the single source of truth for
//!   ownership
//! - `listings`: O(1) lookup of the active sale price; a star id is absent
//!   exactly when the star is not for sale
//!
//! ## Invariants Enforced
//!
//! - Star ids are unique; a duplicate create fails without overwriting
//! - Every star has exactly one current owner at all times
//! - A listing exists only for an existing star
//! - Any ownership change removes the star's active listing, so a stale
//!   listing can never be bought at the previous owner's expense
//! - A failed call leaves all state untouched; a sale settles payment
//!   before any ownership mutation

use super::entities::{Address, RegistryConfig, SaleReceipt, Settlement, Star, StarId};
use super::errors::RegistryError;
use crate::ports::SettlementPort;
use std::collections::HashMap;

/// Post-swap ownership of an exchange, for the caller and the
/// `StarsExchanged` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeOutcome {
    pub star_a: StarId,
    pub star_b: StarId,
    /// New owner of `star_a` (the previous owner of `star_b`).
    pub owner_a: Address,
    /// New owner of `star_b` (the previous owner of `star_a`).
    pub owner_b: Address,
}

/// The registry: all star records and active sale listings.
///
/// Mutations are serialized by the hosting environment; each method either
/// completes fully or returns an error having changed nothing. Read
/// accessors take `&self` and are safe to run concurrently.
#[derive(Debug)]
pub struct StarRegistry {
    /// Immutable configuration, set at construction.
    config: RegistryConfig,

    /// All registered stars, indexed by id. Never shrinks.
    stars: HashMap<StarId, Star>,

    /// Active sale listings: star id to asking price. Absence means
    /// "not for sale".
    listings: HashMap<StarId, u128>,
}

impl StarRegistry {
    /// Creates an empty registry with the given configuration.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            stars: HashMap::new(),
            listings: HashMap::new(),
        }
    }

    /// Creates a registry with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RegistryConfig::default())
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The registry's fixed display name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// The registry's fixed short symbol.
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    /// Returns the number of registered stars.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Returns true if no star has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Returns the number of active sale listings.
    pub fn listed_count(&self) -> usize {
        self.listings.len()
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Registers a new star owned by `caller`.
    ///
    /// # Errors
    /// - `InvalidIdentifier` if `id` is zero
    /// - `DuplicateIdentifier` if `id` is already registered; the existing
    ///   record is left untouched
    pub fn create_star(
        &mut self,
        name: impl Into<String>,
        id: StarId,
        caller: Address,
    ) -> Result<(), RegistryError> {
        if id == 0 {
            return Err(RegistryError::InvalidIdentifier);
        }
        if self.stars.contains_key(&id) {
            return Err(RegistryError::DuplicateIdentifier(id));
        }

        self.stars.insert(
            id,
            Star {
                id,
                name: name.into(),
                owner: caller,
            },
        );
        Ok(())
    }

    /// Lists star `id` for sale at `price`, replacing any previous listing.
    ///
    /// # Errors
    /// - `StarNotFound` if `id` is unknown
    /// - `NotOwner` if `caller` is not the current owner
    /// - `PriceBelowMinimum` if `price` is under the configured floor
    pub fn put_up_for_sale(
        &mut self,
        id: StarId,
        price: u128,
        caller: Address,
    ) -> Result<(), RegistryError> {
        self.require_owner(id, caller)?;
        if price < self.config.min_listing_price {
            return Err(RegistryError::PriceBelowMinimum {
                price,
                minimum: self.config.min_listing_price,
            });
        }

        self.listings.insert(id, price);
        Ok(())
    }

    /// Purchases star `id` for `buyer`, paying with `attached` native units.
    ///
    /// Settlement runs first through `ledger` as one all-or-nothing call:
    /// the seller is credited exactly the listed price and any excess of
    /// `attached` over the price is refunded to the buyer. Only after the
    /// ledger accepts does ownership move and the listing disappear, so a
    /// settlement failure leaves the registry untouched.
    ///
    /// # Errors
    /// - `NotForSale` if no active listing exists for `id`
    /// - `InsufficientPayment` if `attached` is below the listed price
    /// - `SettlementFailed` if the ledger rejects the settlement
    pub fn buy_star<S: SettlementPort>(
        &mut self,
        id: StarId,
        buyer: Address,
        attached: u128,
        ledger: &mut S,
    ) -> Result<SaleReceipt, RegistryError> {
        let price = *self
            .listings
            .get(&id)
            .ok_or(RegistryError::NotForSale(id))?;
        if attached < price {
            return Err(RegistryError::InsufficientPayment {
                required: price,
                attached,
            });
        }

        // Listings exist only for registered stars.
        let star = self.stars.get(&id).ok_or(RegistryError::StarNotFound(id))?;
        let seller = star.owner;
        let refund = attached - price;

        ledger.apply(&Settlement::for_sale(seller, buyer, price, attached))?;

        // Payment settled; the remaining mutations cannot fail.
        if let Some(star) = self.stars.get_mut(&id) {
            star.owner = buyer;
        }
        self.listings.remove(&id);

        Ok(SaleReceipt {
            star_id: id,
            seller,
            buyer,
            price,
            refund,
        })
    }

    /// Reassigns star `id` to `new_owner` without payment. Drops any
    /// active listing. Returns the previous owner.
    ///
    /// # Errors
    /// - `StarNotFound` if `id` is unknown
    /// - `NotOwner` if `caller` is not the current owner
    pub fn transfer_star(
        &mut self,
        new_owner: Address,
        id: StarId,
        caller: Address,
    ) -> Result<Address, RegistryError> {
        self.require_owner(id, caller)?;

        let star = self.stars.get_mut(&id).ok_or(RegistryError::StarNotFound(id))?;
        let previous = star.owner;
        star.owner = new_owner;
        self.listings.remove(&id);
        Ok(previous)
    }

    /// Swaps the owners of `id_a` and `id_b`. Drops any active listing on
    /// both stars.
    ///
    /// The caller must currently own at least one side; an exchange
    /// initiated by a third party owning neither star fails.
    ///
    /// # Errors
    /// - `StarNotFound` if either id is unknown
    /// - `NotOwner` if `caller` owns neither star
    pub fn exchange_stars(
        &mut self,
        id_a: StarId,
        id_b: StarId,
        caller: Address,
    ) -> Result<ExchangeOutcome, RegistryError> {
        let owner_a = self
            .stars
            .get(&id_a)
            .map(|s| s.owner)
            .ok_or(RegistryError::StarNotFound(id_a))?;
        let owner_b = self
            .stars
            .get(&id_b)
            .map(|s| s.owner)
            .ok_or(RegistryError::StarNotFound(id_b))?;
        if caller != owner_a && caller != owner_b {
            return Err(RegistryError::NotOwner(id_a));
        }

        if let Some(star) = self.stars.get_mut(&id_a) {
            star.owner = owner_b;
        }
        if let Some(star) = self.stars.get_mut(&id_b) {
            star.owner = owner_a;
        }
        self.listings.remove(&id_a);
        self.listings.remove(&id_b);

        Ok(ExchangeOutcome {
            star_a: id_a,
            star_b: id_b,
            owner_a: owner_b,
            owner_b: owner_a,
        })
    }

    // =========================================================================
    // READ ACCESSORS
    // =========================================================================

    /// Looks up a star's name.
    ///
    /// # Errors
    /// - `StarNotFound` if `id` is unknown
    pub fn look_up(&self, id: StarId) -> Result<&str, RegistryError> {
        self.stars
            .get(&id)
            .map(|s| s.name.as_str())
            .ok_or(RegistryError::StarNotFound(id))
    }

    /// Gets the full record for a star, if registered.
    pub fn star(&self, id: StarId) -> Option<&Star> {
        self.stars.get(&id)
    }

    /// Gets a star's current owner.
    ///
    /// # Errors
    /// - `StarNotFound` if `id` is unknown
    pub fn owner_of(&self, id: StarId) -> Result<Address, RegistryError> {
        self.stars
            .get(&id)
            .map(|s| s.owner)
            .ok_or(RegistryError::StarNotFound(id))
    }

    /// Gets the active asking price for a star, or `None` if it is not
    /// for sale.
    pub fn sale_price_of(&self, id: StarId) -> Option<u128> {
        self.listings.get(&id).copied()
    }

    /// Authorization guard shared by the owner-gated mutations.
    fn require_owner(&self, id: StarId, caller: Address) -> Result<(), RegistryError> {
        let star = self.stars.get(&id).ok_or(RegistryError::StarNotFound(id))?;
        if star.owner != caller {
            return Err(RegistryError::NotOwner(id));
        }
        Ok(())
    }
}
