use crate::espn::{EspnCompetition, EspnCompetitor, EspnEvent, ScoreboardResponse};
use crate::{Game, GameState, League, TeamLine};
use chrono::NaiveDate;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const ESPN_SITE_V2: &str = "https://site.api.espn.com";

/// Scoreboard client backed by ESPN's public site v2 endpoints.
#[derive(Debug, Clone)]
pub struct ScoresApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for ScoresApi {
    fn default() -> Self {
        Self::with_base_url(ESPN_SITE_V2)
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ScoresApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different host. Used by tests against a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent("courtside/0.1 (terminal scoreboard)")
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Fetch and normalize the league's scoreboard for the given calendar date.
    ///
    /// Every upstream failure — connect error, any non-success status, or a
    /// JSON body that doesn't decode — comes back as an `ApiError`; the caller
    /// treats them uniformly as "data unavailable".
    pub async fn fetch_scoreboard(&self, league: League, date: NaiveDate) -> ApiResult<Vec<Game>> {
        let url = format!(
            "{}/apis/site/v2/sports/basketball/{}/scoreboard?dates={}",
            self.base_url,
            league.slug(),
            date.format("%Y%m%d"),
        );
        let raw: ScoreboardResponse = self.get(&url).await?;
        Ok(normalize(raw))
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        response
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Mapping: ESPN wire types → clean domain types
// ---------------------------------------------------------------------------

/// Normalize a raw scoreboard payload into games, preserving event order.
///
/// Per-record policy: an event whose first competition is missing either the
/// "home" or the "away" competitor is malformed and gets skipped; the rest of
/// the batch still normalizes.
pub fn normalize(raw: ScoreboardResponse) -> Vec<Game> {
    raw.events
        .unwrap_or_default()
        .iter()
        .filter_map(map_event_to_game)
        .collect()
}

fn map_event_to_game(event: &EspnEvent) -> Option<Game> {
    let competition = event.competitions.as_deref().unwrap_or_default().first()?;
    let home = find_competitor(competition, "home")?;
    let away = find_competitor(competition, "away")?;

    let id = competition
        .id
        .clone()
        .or_else(|| event.id.clone())
        .unwrap_or_default();

    let status = competition.status.as_ref();
    let status_type = status.and_then(|s| s.status_type.as_ref());

    Some(Game {
        id,
        home: map_team_line(home),
        away: map_team_line(away),
        period: status.and_then(|s| s.period).unwrap_or_default(),
        clock: status
            .and_then(|s| s.display_clock.clone())
            .unwrap_or_default(),
        detail: status_type
            .and_then(|t| t.description.clone())
            .unwrap_or_default(),
        state: status_type
            .and_then(|t| t.state.as_deref())
            .map(parse_state)
            .unwrap_or_default(),
    })
}

fn find_competitor<'a>(competition: &'a EspnCompetition, side: &str) -> Option<&'a EspnCompetitor> {
    competition
        .competitors
        .as_deref()
        .unwrap_or_default()
        .iter()
        .find(|c| c.home_away.as_deref() == Some(side))
}

fn map_team_line(c: &EspnCompetitor) -> TeamLine {
    TeamLine {
        abbrev: c
            .team
            .as_ref()
            .and_then(|t| t.abbreviation.clone())
            .unwrap_or_default(),
        logo: c
            .team
            .as_ref()
            .and_then(|t| t.logo.clone())
            .unwrap_or_default(),
        score: parse_score(c.score.as_deref()),
    }
}

/// ESPN sends scores as strings; empty or non-numeric values count as 0.
fn parse_score(score: Option<&str>) -> u32 {
    score.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

fn parse_state(state: &str) -> GameState {
    match state {
        "in" => GameState::In,
        "post" => GameState::Post,
        _ => GameState::Pre,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(id: &str, home_score: serde_json::Value, away_score: serde_json::Value, state: &str) -> serde_json::Value {
        json!({
            "id": id,
            "competitions": [{
                "id": id,
                "competitors": [
                    {
                        "homeAway": "home",
                        "score": home_score,
                        "team": { "abbreviation": "LAL", "logo": "https://a.espncdn.com/lal.png" }
                    },
                    {
                        "homeAway": "away",
                        "score": away_score,
                        "team": { "abbreviation": "BOS", "logo": "https://a.espncdn.com/bos.png" }
                    }
                ],
                "status": {
                    "period": 3,
                    "displayClock": "4:32",
                    "type": { "state": state, "description": "4:32 - 3rd Quarter" }
                }
            }]
        })
    }

    fn parse_scoreboard(value: serde_json::Value) -> ScoreboardResponse {
        serde_json::from_value(value).expect("fixture should deserialize")
    }

    #[test]
    fn normalize_preserves_event_count_and_order() {
        let raw = parse_scoreboard(json!({
            "events": [
                event("401", json!("102"), json!("99"), "in"),
                event("402", json!("88"), json!("91"), "post"),
                event("403", json!("0"), json!("0"), "pre"),
            ]
        }));
        let games = normalize(raw);
        assert_eq!(games.len(), 3);
        assert_eq!(games[0].id, "401");
        assert_eq!(games[1].id, "402");
        assert_eq!(games[2].id, "403");
        assert_eq!(games[0].home.score, 102);
        assert_eq!(games[0].away.score, 99);
    }

    #[test]
    fn missing_or_non_numeric_scores_default_to_zero() {
        let raw = parse_scoreboard(json!({
            "events": [
                event("401", json!(null), json!(""), "pre"),
                event("402", json!("n/a"), json!("12"), "in"),
            ]
        }));
        let games = normalize(raw);
        assert_eq!(games[0].home.score, 0);
        assert_eq!(games[0].away.score, 0);
        assert_eq!(games[1].home.score, 0);
        assert_eq!(games[1].away.score, 12);
    }

    #[test]
    fn event_missing_a_side_is_skipped_not_fatal() {
        let raw = parse_scoreboard(json!({
            "events": [
                {
                    "id": "401",
                    "competitions": [{
                        "id": "401",
                        "competitors": [
                            { "homeAway": "home", "score": "10" }
                        ]
                    }]
                },
                event("402", json!("55"), json!("60"), "in"),
            ]
        }));
        let games = normalize(raw);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, "402");
    }

    #[test]
    fn state_maps_to_live_final_or_pregame() {
        assert_eq!(parse_state("in"), GameState::In);
        assert_eq!(parse_state("post"), GameState::Post);
        assert_eq!(parse_state("pre"), GameState::Pre);
        assert_eq!(parse_state("weird"), GameState::Pre);
    }

    #[test]
    fn live_and_final_flags_are_exclusive() {
        let raw = parse_scoreboard(json!({
            "events": [event("401", json!("50"), json!("52"), "in")]
        }));
        let games = normalize(raw);
        assert!(games[0].is_live());
        assert!(!games[0].is_final());
    }

    #[test]
    fn period_and_clock_come_from_competition_status() {
        let raw = parse_scoreboard(json!({
            "events": [event("401", json!("50"), json!("52"), "in")]
        }));
        let game = &normalize(raw)[0];
        assert_eq!(game.period, 3);
        assert_eq!(game.clock, "4:32");
        assert_eq!(game.detail, "4:32 - 3rd Quarter");
    }

    #[tokio::test]
    async fn fetch_scoreboard_hits_league_and_date_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/apis/site/v2/sports/basketball/wnba/scoreboard")
            .match_query(mockito::Matcher::UrlEncoded(
                "dates".into(),
                "20260115".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({ "events": [event("401", json!("70"), json!("68"), "in")] }).to_string(),
            )
            .create_async()
            .await;

        let api = ScoresApi::with_base_url(server.url());
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let games = api.fetch_scoreboard(League::Wnba, date).await.unwrap();

        mock.assert_async().await;
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].home.abbrev, "LAL");
    }

    #[tokio::test]
    async fn fetch_scoreboard_surfaces_http_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", mockito::Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let api = ScoresApi::with_base_url(server.url());
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let err = api.fetch_scoreboard(League::Nba, date).await.unwrap_err();
        assert!(matches!(err, ApiError::Api(_, _)));
    }

    #[tokio::test]
    async fn fetch_scoreboard_surfaces_malformed_json() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json at all")
            .create_async()
            .await;

        let api = ScoresApi::with_base_url(server.url());
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let err = api.fetch_scoreboard(League::Nba, date).await.unwrap_err();
        assert!(matches!(err, ApiError::Parsing(_, _)));
    }
}
