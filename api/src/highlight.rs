//! "Game of the night" — pick the single most compelling live game.

use crate::Game;

/// Score one live candidate: a close game late in regulation wins.
/// closeness is 20 minus the score gap (floored at 0); each period played
/// adds 5.
fn excitement(game: &Game) -> u32 {
    let gap = game.home.score.abs_diff(game.away.score);
    let closeness = 20u32.saturating_sub(gap);
    let progress = u32::from(game.period) * 5;
    closeness + progress
}

/// Return the id of the most exciting live game, or `None` when nothing is
/// live. Finals and pre-game contests are never candidates. Ties keep the
/// earlier game in input order — only a strictly greater score replaces the
/// current best.
pub fn game_of_the_night(games: &[Game]) -> Option<&str> {
    let mut best: Option<(&str, u32)> = None;
    for game in games.iter().filter(|g| g.is_live()) {
        let total = excitement(game);
        if best.is_none_or(|(_, high)| total > high) {
            best = Some((&game.id, total));
        }
    }
    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, TeamLine};

    fn live_game(id: &str, home: u32, away: u32, period: u8) -> Game {
        Game {
            id: id.to_string(),
            home: TeamLine { score: home, ..Default::default() },
            away: TeamLine { score: away, ..Default::default() },
            period,
            state: GameState::In,
            ..Default::default()
        }
    }

    #[test]
    fn no_live_games_means_no_highlight() {
        let mut final_game = live_game("401", 100, 98, 4);
        final_game.state = GameState::Post;
        let mut scheduled = live_game("402", 0, 0, 0);
        scheduled.state = GameState::Pre;
        assert_eq!(game_of_the_night(&[]), None);
        assert_eq!(game_of_the_night(&[final_game, scheduled]), None);
    }

    #[test]
    fn close_late_game_beats_blowout_early_game() {
        // A: 50-52 in Q4 → closeness 18 + progress 20 = 38
        // B: 50-70 in Q1 → closeness 0 + progress 5 = 5
        let a = live_game("a", 50, 52, 4);
        let b = live_game("b", 50, 70, 1);
        assert_eq!(game_of_the_night(&[b.clone(), a.clone()]), Some("a"));
        assert_eq!(game_of_the_night(&[a, b]), Some("a"));
    }

    #[test]
    fn ties_go_to_the_first_game_in_input_order() {
        let first = live_game("first", 80, 82, 3);
        let second = live_game("second", 60, 62, 3);
        assert_eq!(game_of_the_night(&[first, second]), Some("first"));
    }

    #[test]
    fn blowout_closeness_floors_at_zero() {
        // 40-point gap would go negative without the floor; progress alone scores it.
        let blowout = live_game("blowout", 90, 50, 2);
        assert_eq!(excitement(&blowout), 10);
    }

    #[test]
    fn finals_never_outrank_live_games() {
        let mut thriller_final = live_game("final", 101, 100, 4);
        thriller_final.state = GameState::Post;
        let quiet_live = live_game("live", 30, 60, 1);
        assert_eq!(
            game_of_the_night(&[thriller_final, quiet_live]),
            Some("live")
        );
    }
}
