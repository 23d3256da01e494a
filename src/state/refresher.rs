use crate::state::messages::UiEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

/// Fixed poll cadence. Not adaptive to fetch latency; a slow fetch just
/// overlaps the next tick and the app's stale-league guard sorts it out.
pub const POLL_INTERVAL: Duration = Duration::from_secs(45);

/// Emits RefreshTick every 45 seconds. The main loop resolves the active
/// league at fire time, so a switch between arm and fire polls the new league.
/// The whole task is aborted and respawned on every league switch, restarting
/// the cadence from the switch.
pub struct PeriodicRefresher {
    ui_events: mpsc::Sender<UiEvent>,
}

impl PeriodicRefresher {
    pub fn new(ui_events: mpsc::Sender<UiEvent>) -> Self {
        Self { ui_events }
    }

    pub async fn run(self) {
        let mut poll_interval = interval(POLL_INTERVAL);
        // Skip the immediate first tick so the startup load isn't double-triggered.
        poll_interval.tick().await;

        loop {
            poll_interval.tick().await;
            if self.ui_events.send(UiEvent::RefreshTick).await.is_err() {
                break;
            }
        }
    }
}
