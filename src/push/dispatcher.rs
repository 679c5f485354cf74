use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::{
    models::push::{
        DeliveryRoute, InteractionEvent, NotificationHandle, PermissionState, PushEnvelope,
    },
    push::permission::{NotificationPlatform, PermissionStateManager},
    templates,
};

/// Receiving ends of the push subsystem's two typed channels, each with
/// exactly one consumer.
pub struct PushChannels {
    pub worker: mpsc::UnboundedReceiver<PushEnvelope>,
    pub interactions: mpsc::UnboundedReceiver<InteractionEvent>,
}

/// In-process push dispatcher. Delivery is attempted directly against the
/// platform; on failure the envelope is relayed through the worker channel
/// instead of surfacing the error.
pub struct PushDispatcher {
    platform: Arc<dyn NotificationPlatform>,
    worker_tx: mpsc::UnboundedSender<PushEnvelope>,
    interaction_tx: mpsc::UnboundedSender<InteractionEvent>,
}

impl PushDispatcher {
    pub fn new(platform: Arc<dyn NotificationPlatform>) -> (Self, PushChannels) {
        let (worker_tx, worker_rx) = mpsc::unbounded_channel();
        let (interaction_tx, interaction_rx) = mpsc::unbounded_channel();

        let dispatcher = Self {
            platform,
            worker_tx,
            interaction_tx,
        };

        let channels = PushChannels {
            worker: worker_rx,
            interactions: interaction_rx,
        };

        (dispatcher, channels)
    }

    /// Sender the embedding shell uses to report notification clicks.
    pub fn interaction_sender(&self) -> mpsc::UnboundedSender<InteractionEvent> {
        self.interaction_tx.clone()
    }

    /// Delivers one envelope. Returns `None` without touching the platform
    /// unless permission is `Granted`. A failed direct delivery falls back
    /// to the worker channel; both routes are success to the caller.
    pub fn dispatch(
        &self,
        permissions: &PermissionStateManager,
        envelope: PushEnvelope,
    ) -> Option<NotificationHandle> {
        let state = permissions.current();
        if state != PermissionState::Granted {
            debug!(?state, "Push dispatch skipped, permission not granted");
            return None;
        }

        let tag = envelope.tag.clone();

        match self.platform.show(&envelope) {
            Ok(()) => {
                debug!(tag = tag.as_deref(), "Push notification shown directly");
                Some(NotificationHandle {
                    tag,
                    route: DeliveryRoute::Direct,
                })
            }
            Err(e) => {
                warn!(
                    error = %e,
                    tag = tag.as_deref(),
                    "Direct delivery failed, relaying through worker channel"
                );

                // Fire and forget; a closed relay means the session is
                // shutting down and the envelope is dropped with it.
                let _ = self.worker_tx.send(envelope);

                Some(NotificationHandle {
                    tag,
                    route: DeliveryRoute::WorkerRelay,
                })
            }
        }
    }

    /// Low-stock convenience wrapper. Tag is canonical per item so a fresh
    /// alert for the same item replaces the visible one.
    pub fn notify_low_stock(
        &self,
        permissions: &PermissionStateManager,
        name: &str,
        quantity: i64,
        reorder_level: i64,
    ) -> Option<NotificationHandle> {
        let envelope = PushEnvelope::new(
            "Low stock alert",
            format!(
                "{}: {} left (reorder at {})",
                templates::sanitize(name),
                quantity,
                reorder_level
            ),
        )
        .with_tag(format!("low-stock-{}", name));

        self.dispatch(permissions, envelope)
    }

    /// Expiry convenience wrapper; the body carries the urgency marker
    /// derived from whole days until expiry.
    pub fn notify_expiry(
        &self,
        permissions: &PermissionStateManager,
        name: &str,
        days_until_expiry: i64,
    ) -> Option<NotificationHandle> {
        let marker = templates::alert::urgency_marker(days_until_expiry);
        let name_clean = templates::sanitize(name);

        let body = if days_until_expiry <= 0 {
            format!("{}: {} has expired", marker, name_clean)
        } else if days_until_expiry == 1 {
            format!("{}: {} expires in 1 day", marker, name_clean)
        } else {
            format!("{}: {} expires in {} days", marker, name_clean, days_until_expiry)
        };

        let envelope = PushEnvelope::new("Expiry alert", body).with_tag(format!("expiry-{}", name));

        self.dispatch(permissions, envelope)
    }
}

/// Single consumer of the worker channel: re-delivers relayed envelopes
/// through the platform's background-worker route. Ends when the dispatcher
/// is dropped.
pub async fn run_worker_relay(
    platform: Arc<dyn NotificationPlatform>,
    mut rx: mpsc::UnboundedReceiver<PushEnvelope>,
) {
    while let Some(envelope) = rx.recv().await {
        debug!(tag = envelope.tag.as_deref(), "Worker relay delivering envelope");
        platform.show_from_worker(&envelope);
    }
}

/// Single consumer of the interaction channel: foregrounds the host window
/// and dismisses the clicked notification. No business logic runs here.
pub async fn run_interaction_loop(
    platform: Arc<dyn NotificationPlatform>,
    mut rx: mpsc::UnboundedReceiver<InteractionEvent>,
) {
    while let Some(event) = rx.recv().await {
        platform.focus_window();

        if let Some(tag) = event.tag.as_deref() {
            platform.dismiss(tag);
        }
    }
}
