use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use chrono::Local;
use hoops_api::{Game, League, highlight};
use log::debug;

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        let settings = AppSettings::load();

        let app = Self {
            state: AppState::default(),
            settings,
        };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // League selection
    // -----------------------------------------------------------------------

    /// Make `league` the active league and put the scoreboard into the
    /// loading phase. Re-selecting the current league still reloads, matching
    /// a manual refresh.
    pub fn select_league(&mut self, league: League) {
        self.state.active_league = league;
        self.state.scoreboard.begin_loading();
    }

    // -----------------------------------------------------------------------
    // Network response handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    /// Ingest a finished fetch. A response for a league the user has since
    /// switched away from is stale and dropped wholesale, so a slow fetch can
    /// never overwrite the newer league's display.
    pub fn on_scoreboard_loaded(&mut self, league: League, games: Vec<Game>) {
        if league != self.state.active_league {
            debug!("dropping stale {} scoreboard", league.label());
            return;
        }
        let highlight_id = highlight::game_of_the_night(&games).map(str::to_owned);
        self.state
            .scoreboard
            .apply_games(games, highlight_id, now_timestamp());
    }

    /// A failed cycle shows its message but keeps the previous last-updated
    /// time; the next tick retries. Stale-league failures are dropped too.
    pub fn on_error(&mut self, league: League, message: String) {
        if league != self.state.active_league {
            debug!("dropping stale {} error", league.label());
            return;
        }
        self.state.scoreboard.apply_failure(message);
    }

    // -----------------------------------------------------------------------
    // View toggles
    // -----------------------------------------------------------------------

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }
}

fn now_timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_state::ScoreboardPhase;
    use hoops_api::{GameState, TeamLine};

    fn game(id: &str, home: u32, away: u32, period: u8, state: GameState) -> Game {
        Game {
            id: id.to_string(),
            home: TeamLine { abbrev: "LAL".into(), score: home, ..Default::default() },
            away: TeamLine { abbrev: "BOS".into(), score: away, ..Default::default() },
            period,
            state,
            ..Default::default()
        }
    }

    #[test]
    fn startup_defaults_to_wnba() {
        let app = App::new();
        assert_eq!(app.state.active_league, League::Wnba);
    }

    #[test]
    fn loaded_games_move_scoreboard_to_ready_with_highlight() {
        let mut app = App::new();
        app.select_league(League::Nba);
        app.on_scoreboard_loaded(
            League::Nba,
            vec![
                game("401", 50, 70, 1, GameState::In),
                game("402", 50, 52, 4, GameState::In),
            ],
        );
        assert_eq!(app.state.scoreboard.phase, ScoreboardPhase::Ready);
        assert_eq!(app.state.scoreboard.highlight_id.as_deref(), Some("402"));
        assert!(app.state.scoreboard.last_updated.is_some());
    }

    #[test]
    fn empty_scoreboard_is_a_valid_state_and_stamps_the_refresh_time() {
        let mut app = App::new();
        app.select_league(League::Wnba);
        app.on_scoreboard_loaded(League::Wnba, Vec::new());
        assert_eq!(app.state.scoreboard.phase, ScoreboardPhase::Empty);
        assert!(app.state.scoreboard.last_updated.is_some());
    }

    #[test]
    fn failure_keeps_the_previous_refresh_time() {
        let mut app = App::new();
        app.select_league(League::Wnba);
        app.on_scoreboard_loaded(League::Wnba, vec![game("401", 10, 8, 1, GameState::In)]);
        let stamped = app.state.scoreboard.last_updated.clone();
        assert!(stamped.is_some());

        app.on_error(League::Wnba, "WNBA is not responding".into());
        assert!(matches!(app.state.scoreboard.phase, ScoreboardPhase::Failed(_)));
        assert_eq!(app.state.scoreboard.last_updated, stamped);
    }

    #[test]
    fn stale_response_for_the_old_league_is_dropped() {
        let mut app = App::new();
        app.select_league(League::Nba);
        // User switches before the NBA fetch lands.
        app.select_league(League::Wnba);
        app.on_scoreboard_loaded(League::Wnba, vec![game("w1", 40, 41, 2, GameState::In)]);

        // Slow NBA response arrives last; it must not clobber the WNBA board.
        app.on_scoreboard_loaded(League::Nba, vec![game("n1", 90, 80, 4, GameState::In)]);
        assert_eq!(app.state.scoreboard.games.len(), 1);
        assert_eq!(app.state.scoreboard.games[0].id, "w1");

        // Same for a stale error: the board stays Ready.
        app.on_error(League::Nba, "NBA is not responding".into());
        assert_eq!(app.state.scoreboard.phase, ScoreboardPhase::Ready);
    }

    #[test]
    fn reselecting_the_active_league_reloads() {
        let mut app = App::new();
        app.select_league(League::Wnba);
        app.on_scoreboard_loaded(League::Wnba, vec![game("401", 10, 8, 1, GameState::In)]);
        app.select_league(League::Wnba);
        assert_eq!(app.state.scoreboard.phase, ScoreboardPhase::Loading);
    }
}
