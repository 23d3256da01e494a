pub mod client;
pub mod espn;
pub mod highlight;

use std::fmt;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of ESPN wire format
// ---------------------------------------------------------------------------

/// The two supported leagues. Selection is process-wide and changed only by
/// explicit user action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum League {
    Nba,
    /// Default on startup.
    #[default]
    Wnba,
}

impl League {
    /// Path segment in ESPN's scoreboard URL.
    pub fn slug(&self) -> &'static str {
        match self {
            League::Nba => "nba",
            League::Wnba => "wnba",
        }
    }

    /// Uppercase display label.
    pub fn label(&self) -> &'static str {
        match self {
            League::Nba => "NBA",
            League::Wnba => "WNBA",
        }
    }

    pub fn all() -> [League; 2] {
        [League::Nba, League::Wnba]
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upstream status state: "pre" | "in" | "post". Anything else maps to Pre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    Pre,
    In,
    Post,
}

/// One side of a matchup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamLine {
    /// Short team code, e.g. "LAL". Doubles as the color-lookup key in the UI.
    pub abbrev: String,
    /// Logo URL, opaque to this crate.
    pub logo: String,
    pub score: u32,
}

/// One normalized game — a pure snapshot with no identity beyond `id`.
/// Every poll cycle produces a fresh list that replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    /// Contest id, stable across polls for the same contest.
    pub id: String,
    pub home: TeamLine,
    pub away: TeamLine,
    /// Period ordinal (quarter for both leagues).
    pub period: u8,
    /// Display clock, e.g. "4:32".
    pub clock: String,
    /// Human-readable status line, e.g. "Final" or "7:30 PM ET".
    pub detail: String,
    pub state: GameState,
}

impl Game {
    pub fn is_live(&self) -> bool {
        self.state == GameState::In
    }

    pub fn is_final(&self) -> bool {
        self.state == GameState::Post
    }
}
