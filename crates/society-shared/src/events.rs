//! Application event bus.
//!
//! Settings changes (theme, backend endpoint) are propagated to interested
//! components through a typed broadcast channel with explicit subscriber
//! lifecycles, instead of ambient global events.

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dim,
    Dark,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "payload")]
#[serde(rename_all = "snake_case")]
pub enum AppEvent {
    ThemeChanged { theme: Theme },
    SettingsSaved,
    DataReloaded { resource: String },
}

pub struct EventBus {
    tx: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn publish(&self, event: AppEvent) {
        if let Err(e) = self.tx.send(event) {
            warn!("Failed to publish event (maybe no subscribers): {}", e);
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(16)
    }
}
