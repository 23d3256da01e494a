use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use hoops_api::{Game, League};

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    LoadScoreboard { league: League },
}

/// Responses carry the league they were fetched for so the app can drop
/// anything that arrives after the user has switched away.
#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    ScoreboardLoaded { league: League, games: Vec<Game> },
    Error { league: League, message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
    /// Fixed-cadence poll tick. The league is resolved at fire time, not at
    /// the time the timer was armed.
    RefreshTick,
}
