use hoops_api::{Game, League};

// ---------------------------------------------------------------------------
// Scoreboard state
// ---------------------------------------------------------------------------

/// Where the current poll cycle for the active league stands.
/// Empty is a valid terminal state, not an error: the league simply has no
/// games scheduled today.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScoreboardPhase {
    #[default]
    Loading,
    Ready,
    Empty,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct ScoreboardState {
    pub phase: ScoreboardPhase,
    pub games: Vec<Game>,
    /// Id of the "game of the night", when any game is live.
    pub highlight_id: Option<String>,
    /// Local time of the last cycle that produced data (including an empty
    /// scoreboard). A failed cycle leaves it untouched, so the user can tell
    /// "no data available" from "data unchanged since HH:MM:SS".
    pub last_updated: Option<String>,
}

impl ScoreboardState {
    pub fn begin_loading(&mut self) {
        self.phase = ScoreboardPhase::Loading;
    }

    /// Store a fresh game list, wholesale-replacing the previous one.
    pub fn apply_games(&mut self, games: Vec<Game>, highlight_id: Option<String>, timestamp: String) {
        self.phase = if games.is_empty() {
            ScoreboardPhase::Empty
        } else {
            ScoreboardPhase::Ready
        };
        self.games = games;
        self.highlight_id = highlight_id;
        self.last_updated = Some(timestamp);
    }

    pub fn apply_failure(&mut self, message: String) {
        self.phase = ScoreboardPhase::Failed(message);
        self.games.clear();
        self.highlight_id = None;
    }
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AppState {
    pub active_league: League,
    pub scoreboard: ScoreboardState,
}
