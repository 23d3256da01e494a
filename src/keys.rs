use crate::app::App;
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyEvent, KeyModifiers};
use hoops_api::League;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// Handle one key press. Returns true when the poll timer must be re-armed
/// (league switch or manual refresh), so the 45s cadence restarts from now.
pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) -> bool {
    let mut guard = app.lock().await;

    match (key_event.code, key_event.modifiers) {
        // Quit
        (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // League switching
        (Char('n') | Char('1'), _) => {
            guard.select_league(League::Nba);
            drop(guard);
            let _ = network_requests
                .send(NetworkRequest::LoadScoreboard { league: League::Nba })
                .await;
            return true;
        }
        (Char('w') | Char('2'), _) => {
            guard.select_league(League::Wnba);
            drop(guard);
            let _ = network_requests
                .send(NetworkRequest::LoadScoreboard { league: League::Wnba })
                .await;
            return true;
        }

        // Manual refresh of whatever league is active
        (Char('r'), _) => {
            let league = guard.state.active_league;
            guard.select_league(league);
            drop(guard);
            let _ = network_requests
                .send(NetworkRequest::LoadScoreboard { league })
                .await;
            return true;
        }

        // Global
        (Char('f'), _) => guard.toggle_full_screen(),

        _ => {}
    }

    false
}
