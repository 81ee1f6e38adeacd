//! Chat relay hub

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::ws::Message;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info, warn};

/// Registry of live chat connections
///
/// Every connected socket gets an unbounded channel; a broadcast walks
/// the registry and pushes the frame at every sender, the origin
/// included. Entries whose receive side has gone away are pruned by
/// the periodic sweep.
#[derive(Clone)]
pub struct ChatHub {
    connections: Arc<RwLock<HashMap<String, mpsc::UnboundedSender<Message>>>>,
}

impl ChatHub {
    pub fn new() -> Self {
        Self {
            connections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn register(&self, connection_id: String, sender: mpsc::UnboundedSender<Message>) {
        self.connections
            .write()
            .await
            .insert(connection_id.clone(), sender);
        info!(connection_id = %connection_id, "Chat connection registered");
    }

    pub async fn unregister(&self, connection_id: &str) {
        if self.connections.write().await.remove(connection_id).is_some() {
            info!(connection_id = %connection_id, "Chat connection unregistered");
        }
    }

    /// Relays a frame to every connection and reports how many took it
    pub async fn broadcast(&self, message: Message) -> usize {
        let connections = self.connections.read().await;
        let mut delivered = 0;
        for (connection_id, sender) in connections.iter() {
            if sender.send(message.clone()).is_ok() {
                delivered += 1;
            } else {
                warn!(connection_id = %connection_id, "Dropping frame for closed chat connection");
            }
        }
        delivered
    }

    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Removes entries whose receiver was dropped without a close frame
    pub async fn sweep_closed(&self) {
        let mut connections = self.connections.write().await;
        let before = connections.len();
        connections.retain(|_, sender| !sender.is_closed());
        let removed = before - connections.len();
        if removed > 0 {
            debug!(removed = removed, "Swept dead chat connections");
        }
    }

    /// Background task keeping the registry free of dead entries
    pub fn start_sweep_task(hub: ChatHub) {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(30));
            loop {
                interval.tick().await;
                hub.sweep_closed().await;
            }
        });
    }
}

impl Default for ChatHub {
    fn default() -> Self {
        Self::new()
    }
}
