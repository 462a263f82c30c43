//! Call handler for the Star Registry.
//!
//! Owns the registry state machine together with the settlement port and
//! the event sink, and processes authenticated calls one at a time. The
//! hosting environment serializes mutating calls; read queries take
//! `&self` and may run concurrently.
//!
//! Guard order on every mutation: payability first, then the domain
//! operation. Events are emitted only after the mutation has committed.

use crate::domain::{RegistryError, StarRegistry};
use crate::events::{
    RegistryEvent, SaleCompletedPayload, StarCreatedPayload, StarListedPayload,
    StarTransferredPayload, StarsExchangedPayload,
};
use crate::ipc::calls::*;
use crate::ports::{EventSink, SettlementPort};

/// Registry call handler, generic over the settlement backend and event
/// destination.
pub struct RegistryHandler<S: SettlementPort, E: EventSink> {
    registry: StarRegistry,
    settlement: S,
    events: E,
}

impl<S: SettlementPort, E: EventSink> RegistryHandler<S, E> {
    /// Creates a handler around an existing registry.
    pub fn new(registry: StarRegistry, settlement: S, events: E) -> Self {
        Self {
            registry,
            settlement,
            events,
        }
    }

    /// Returns a reference to the underlying registry.
    pub fn registry(&self) -> &StarRegistry {
        &self.registry
    }

    /// Returns a reference to the settlement backend.
    pub fn settlement(&self) -> &S {
        &self.settlement
    }

    /// Returns a reference to the event sink.
    pub fn events(&self) -> &E {
        &self.events
    }

    /// Tears the handler apart, returning its components.
    pub fn into_parts(self) -> (StarRegistry, S, E) {
        (self.registry, self.settlement, self.events)
    }

    /// Rejects attached value on non-payable operations.
    fn require_no_value(ctx: &CallContext) -> Result<(), RegistryError> {
        if ctx.attached_value > 0 {
            return Err(RegistryError::UnexpectedPayment {
                attached: ctx.attached_value,
            });
        }
        Ok(())
    }

    // =========================================================================
    // MUTATING CALLS
    // =========================================================================

    /// Handles CreateStarRequest. Non-payable.
    pub fn handle_create_star(
        &mut self,
        ctx: &CallContext,
        request: CreateStarRequest,
    ) -> Result<CreateStarResponse, RegistryError> {
        Self::require_no_value(ctx)?;

        self.registry
            .create_star(request.name.clone(), request.star_id, ctx.caller)?;

        self.events.emit(RegistryEvent::StarCreated(StarCreatedPayload {
            star_id: request.star_id,
            name: request.name,
            owner: ctx.caller,
        }));

        Ok(CreateStarResponse {
            correlation_id: request.correlation_id,
            star_id: request.star_id,
        })
    }

    /// Handles ListStarRequest. Non-payable; owner-gated in the domain.
    pub fn handle_list_star(
        &mut self,
        ctx: &CallContext,
        request: ListStarRequest,
    ) -> Result<ListStarResponse, RegistryError> {
        Self::require_no_value(ctx)?;

        self.registry
            .put_up_for_sale(request.star_id, request.price, ctx.caller)?;

        self.events.emit(RegistryEvent::StarListed(StarListedPayload {
            star_id: request.star_id,
            price: request.price,
            seller: ctx.caller,
        }));

        Ok(ListStarResponse {
            correlation_id: request.correlation_id,
            star_id: request.star_id,
            price: request.price,
        })
    }

    /// Handles BuyStarRequest. The only payable call; the attached value
    /// funds the purchase and any excess comes back to the caller through
    /// settlement.
    pub fn handle_buy_star(
        &mut self,
        ctx: &CallContext,
        request: BuyStarRequest,
    ) -> Result<BuyStarResponse, RegistryError> {
        let receipt = self.registry.buy_star(
            request.star_id,
            ctx.caller,
            ctx.attached_value,
            &mut self.settlement,
        )?;

        self.events
            .emit(RegistryEvent::SaleCompleted(SaleCompletedPayload {
                star_id: receipt.star_id,
                seller: receipt.seller,
                buyer: receipt.buyer,
                price: receipt.price,
                refund: receipt.refund,
            }));

        Ok(BuyStarResponse {
            correlation_id: request.correlation_id,
            receipt,
        })
    }

    /// Handles TransferStarRequest. Non-payable; owner-gated in the domain.
    pub fn handle_transfer_star(
        &mut self,
        ctx: &CallContext,
        request: TransferStarRequest,
    ) -> Result<TransferStarResponse, RegistryError> {
        Self::require_no_value(ctx)?;

        let previous_owner =
            self.registry
                .transfer_star(request.new_owner, request.star_id, ctx.caller)?;

        self.events
            .emit(RegistryEvent::StarTransferred(StarTransferredPayload {
                star_id: request.star_id,
                from: previous_owner,
                to: request.new_owner,
            }));

        Ok(TransferStarResponse {
            correlation_id: request.correlation_id,
            star_id: request.star_id,
            previous_owner,
            new_owner: request.new_owner,
        })
    }

    /// Handles ExchangeStarsRequest. Non-payable; the caller must own at
    /// least one side.
    pub fn handle_exchange_stars(
        &mut self,
        ctx: &CallContext,
        request: ExchangeStarsRequest,
    ) -> Result<ExchangeStarsResponse, RegistryError> {
        Self::require_no_value(ctx)?;

        let outcome = self
            .registry
            .exchange_stars(request.star_a, request.star_b, ctx.caller)?;

        self.events
            .emit(RegistryEvent::StarsExchanged(StarsExchangedPayload {
                star_a: outcome.star_a,
                star_b: outcome.star_b,
                owner_a: outcome.owner_a,
                owner_b: outcome.owner_b,
            }));

        Ok(ExchangeStarsResponse {
            correlation_id: request.correlation_id,
            star_a: outcome.star_a,
            star_b: outcome.star_b,
            owner_a: outcome.owner_a,
            owner_b: outcome.owner_b,
        })
    }

    // =========================================================================
    // READ-ONLY QUERIES
    // =========================================================================

    /// Handles LookUpStarRequest.
    pub fn handle_look_up(
        &self,
        request: LookUpStarRequest,
    ) -> Result<LookUpStarResponse, RegistryError> {
        let name = self.registry.look_up(request.star_id)?.to_string();
        Ok(LookUpStarResponse {
            correlation_id: request.correlation_id,
            star_id: request.star_id,
            name,
        })
    }

    /// Handles StarOwnerRequest.
    pub fn handle_star_owner(
        &self,
        request: StarOwnerRequest,
    ) -> Result<StarOwnerResponse, RegistryError> {
        let owner = self.registry.owner_of(request.star_id)?;
        Ok(StarOwnerResponse {
            correlation_id: request.correlation_id,
            star_id: request.star_id,
            owner,
        })
    }

    /// Handles SalePriceRequest. Unlisted stars answer with `None` rather
    /// than an error, so indexers can poll without special-casing.
    pub fn handle_sale_price(
        &self,
        request: SalePriceRequest,
    ) -> Result<SalePriceResponse, RegistryError> {
        // Distinguish "not listed" from "no such star".
        self.registry.owner_of(request.star_id)?;
        Ok(SalePriceResponse {
            correlation_id: request.correlation_id,
            star_id: request.star_id,
            price: self.registry.sale_price_of(request.star_id),
        })
    }

    /// Handles RegistryInfoRequest. Never fails.
    pub fn handle_registry_info(&self, request: RegistryInfoRequest) -> RegistryInfoResponse {
        RegistryInfoResponse {
            correlation_id: request.correlation_id,
            name: self.registry.name().to_string(),
            symbol: self.registry.symbol().to_string(),
        }
    }
}
