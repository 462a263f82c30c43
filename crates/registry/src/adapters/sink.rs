//! Event sink adapters.

use crate::events::RegistryEvent;
use crate::ports::EventSink;

/// Sink that logs each event as a structured tracing line. For hosts
/// whose indexers scrape logs rather than subscribe to a bus.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&mut self, event: RegistryEvent) {
        match &event {
            RegistryEvent::StarCreated(p) => {
                tracing::info!(
                    "[registry] ⭐ Star #{} \"{}\" created for {}",
                    p.star_id,
                    p.name,
                    hex_prefix(&p.owner)
                );
            }
            RegistryEvent::StarListed(p) => {
                tracing::info!(
                    "[registry] Star #{} listed at {} by {}",
                    p.star_id,
                    p.price,
                    hex_prefix(&p.seller)
                );
            }
            RegistryEvent::SaleCompleted(p) => {
                tracing::info!(
                    "[registry] Star #{} sold: {} → {} for {} (refund {})",
                    p.star_id,
                    hex_prefix(&p.seller),
                    hex_prefix(&p.buyer),
                    p.price,
                    p.refund
                );
            }
            RegistryEvent::StarTransferred(p) => {
                tracing::info!(
                    "[registry] Star #{} transferred: {} → {}",
                    p.star_id,
                    hex_prefix(&p.from),
                    hex_prefix(&p.to)
                );
            }
            RegistryEvent::StarsExchanged(p) => {
                tracing::info!(
                    "[registry] Stars #{} and #{} exchanged; new owners {} / {}",
                    p.star_a,
                    p.star_b,
                    hex_prefix(&p.owner_a),
                    hex_prefix(&p.owner_b)
                );
            }
        }
    }
}

/// Sink that retains every event in order. Test instrumentation and a
/// building block for in-process indexers.
#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    events: Vec<RegistryEvent>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event emitted so far, oldest first.
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    /// The most recent event, if any.
    pub fn last(&self) -> Option<&RegistryEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&mut self, event: RegistryEvent) {
        self.events.push(event);
    }
}

/// Short hex rendering of an address for log lines.
fn hex_prefix(address: &[u8; 20]) -> String {
    let mut out = String::with_capacity(10);
    out.push_str("0x");
    for byte in &address[..4] {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}
