//! # Concurrent Read Access
//!
//! The hosting environment serializes mutations, but read-only lookups may
//! run concurrently and must never observe a half-applied mutation. These
//! tests share a registry behind `parking_lot::RwLock` and hammer it from
//! reader threads while a single writer mutates between write locks.

#[cfg(test)]
mod tests {
    use parking_lot::RwLock;
    use star_registry::adapters::{InMemoryLedger, RecordingEventSink};
    use star_registry::domain::{Address, StarRegistry};
    use star_registry::ipc::{BuyStarRequest, CallContext, RegistryHandler};
    use std::sync::Arc;
    use std::thread;
    use uuid::Uuid;

    const SELLER: Address = [0x0B; 20];
    const BUYER: Address = [0x0C; 20];

    type Shared = Arc<RwLock<RegistryHandler<InMemoryLedger, RecordingEventSink>>>;

    fn shared_handler_with_listed_star() -> Shared {
        let mut registry = StarRegistry::with_defaults();
        registry.create_star("contended star", 1, SELLER).unwrap();
        registry.put_up_for_sale(1, 10_000, SELLER).unwrap();
        Arc::new(RwLock::new(RegistryHandler::new(
            registry,
            InMemoryLedger::new(),
            RecordingEventSink::new(),
        )))
    }

    #[test]
    fn readers_only_ever_see_before_or_after_states() {
        let shared = shared_handler_with_listed_star();

        let mut readers = Vec::new();
        for _ in 0..4 {
            let shared = Arc::clone(&shared);
            readers.push(thread::spawn(move || {
                for _ in 0..2_000 {
                    let guard = shared.read();
                    let owner = guard.registry().owner_of(1).unwrap();
                    let price = guard.registry().sale_price_of(1);
                    // Before the sale: seller owns a listed star. After:
                    // buyer owns an unlisted one. Nothing in between.
                    match owner {
                        o if o == SELLER => assert_eq!(price, Some(10_000)),
                        o if o == BUYER => assert_eq!(price, None),
                        other => panic!("unexpected owner {other:?}"),
                    }
                }
            }));
        }

        {
            let mut guard = shared.write();
            guard
                .handle_buy_star(
                    &CallContext::with_value(BUYER, 10_000),
                    BuyStarRequest {
                        correlation_id: Uuid::new_v4(),
                        star_id: 1,
                    },
                )
                .unwrap();
        }

        for reader in readers {
            reader.join().unwrap();
        }

        let guard = shared.read();
        assert_eq!(guard.registry().owner_of(1).unwrap(), BUYER);
        assert_eq!(guard.settlement().balance_of(&SELLER), 10_000);
    }

    #[test]
    fn parallel_lookups_on_disjoint_stars_agree() {
        let mut registry = StarRegistry::with_defaults();
        for id in 1..=64u64 {
            let mut owner: Address = [0u8; 20];
            owner[0] = id as u8;
            registry.create_star(format!("star-{id}"), id, owner).unwrap();
        }
        let shared: Shared = Arc::new(RwLock::new(RegistryHandler::new(
            registry,
            InMemoryLedger::new(),
            RecordingEventSink::new(),
        )));

        let handles: Vec<_> = (0..8u64)
            .map(|worker| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for round in 0..500u64 {
                        let id = (worker * 8 + round % 8) + 1;
                        let guard = shared.read();
                        let owner = guard.registry().owner_of(id).unwrap();
                        assert_eq!(owner[0], id as u8);
                        assert_eq!(
                            guard.registry().look_up(id).unwrap(),
                            format!("star-{id}")
                        );
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
