use hoops_api::Game;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use crate::ui::colors;

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Rows per card: border, header line, away line, home line, border.
pub const CARD_HEIGHT: u16 = 5;

/// Minimum card width; the grid falls back to one column below this.
pub const CARD_MIN_WIDTH: u16 = 26;

// ---------------------------------------------------------------------------
// GameCard — one matchup rendered as a bordered card
// ---------------------------------------------------------------------------

/// One game card. The highlighted card (the "game of the night") gets a
/// thick yellow border and a title; all others carry the home team's color
/// as the border accent.
pub struct GameCard<'a> {
    pub game: &'a Game,
    pub highlighted: bool,
}

impl Widget for GameCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < CARD_HEIGHT || area.width < 10 {
            return;
        }

        let block = if self.highlighted {
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" GAME OF THE NIGHT ")
                .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::color_for(&self.game.home.abbrev)))
        };

        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            header_line(self.game),
            team_line(&self.game.away.abbrev, self.game.away.score),
            team_line(&self.game.home.abbrev, self.game.home.score),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Header region: exactly one of three layouts — live, final, or scheduled.
fn header_line(game: &Game) -> Line<'_> {
    if game.is_live() {
        Line::from(vec![
            Span::styled("● LIVE", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(format!("  Q{} | {}", game.period, game.clock)),
        ])
    } else if game.is_final() {
        Line::from(Span::styled(
            game.detail.to_uppercase(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            game.detail.as_str(),
            Style::default().fg(Color::Gray),
        ))
    }
}

fn team_line(abbrev: &str, score: u32) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{abbrev:<5}"),
            Style::default()
                .fg(colors::color_for(abbrev))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{score:>3}")),
    ])
}
