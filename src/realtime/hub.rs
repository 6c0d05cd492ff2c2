use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

use crate::realtime::event::RealtimeEvent;

pub type ConnectionId = u64;

/// One broadcast item. `origin` is set for peer relays so the sending
/// connection can skip its own message.
#[derive(Debug, Clone)]
struct Envelope {
    origin: Option<ConnectionId>,
    event: Arc<RealtimeEvent>,
}

/// Process-wide fan-out point shared by the HTTP handlers and every
/// WebSocket connection. Cheap to clone.
#[derive(Clone)]
pub struct RealtimeHub {
    tx: broadcast::Sender<Envelope>,
    next_id: Arc<AtomicU64>,
}

impl RealtimeHub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self {
            tx,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Attach a new client. Events published before this call are never
    /// seen by it.
    pub fn connect(&self) -> Subscription {
        Subscription {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            rx: self.tx.subscribe(),
        }
    }

    /// Server-originated event, delivered to every connected client.
    /// Returns how many clients it was queued for.
    pub fn publish(&self, event: RealtimeEvent) -> usize {
        self.send(None, event)
    }

    /// Re-emit a chat payload from `origin` to every other client.
    pub fn relay(&self, origin: ConnectionId, payload: serde_json::Value) -> usize {
        self.send(Some(origin), RealtimeEvent::ReceiveMessage(payload))
    }

    pub fn connection_count(&self) -> usize {
        self.tx.receiver_count()
    }

    fn send(&self, origin: Option<ConnectionId>, event: RealtimeEvent) -> usize {
        let name = event.name();
        let envelope = Envelope {
            origin,
            event: Arc::new(event),
        };
        match self.tx.send(envelope) {
            Ok(count) => {
                tracing::debug!("[Realtime] {} queued for {} connections", name, count);
                count
            }
            Err(_) => {
                tracing::debug!("[Realtime] {} dropped, no connections", name);
                0
            }
        }
    }
}

/// A single client's view of the hub.
pub struct Subscription {
    id: ConnectionId,
    rx: broadcast::Receiver<Envelope>,
}

impl Subscription {
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Next event meant for this client, or `None` once the hub is gone.
    /// A client that falls more than the channel capacity behind loses the
    /// overflow and carries on from the oldest event still queued.
    pub async fn recv(&mut self) -> Option<Arc<RealtimeEvent>> {
        loop {
            match self.rx.recv().await {
                Ok(envelope) if envelope.origin == Some(self.id) => continue,
                Ok(envelope) => return Some(envelope.event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        "[Realtime] Connection {} lagged, skipped {} events",
                        self.id,
                        skipped
                    );
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
