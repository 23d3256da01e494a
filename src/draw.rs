use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::Line;
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use tui::{Frame, Terminal};

use crate::app::App;
use crate::components::card::{CARD_HEIGHT, CARD_MIN_WIDTH, GameCard};
use crate::state::app_state::ScoreboardPhase;
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use hoops_api::League;

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 6 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    terminal
        .draw(|f| {
            layout.update(f.area(), app.settings.full_screen);

            if !app.settings.full_screen {
                draw_tabs(f, layout.tab_bar, app);
                draw_status_bar(f, layout.status_bar, app);
            }

            draw_scoreboard(f, layout.main, app);
            draw_loading_spinner(f, f.area(), app, loading);
        })
        .unwrap();
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let leagues = League::all();
    let tab_index = leagues
        .iter()
        .position(|l| *l == app.state.active_league)
        .unwrap_or(0);

    let titles: Vec<Line> = leagues.iter().map(|l| Line::from(l.label())).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type)
                .title(" courtside "),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let updated = Paragraph::new(last_updated_text(app))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(Style::default().fg(Color::Gray));
    f.render_widget(updated, tab_bar[1]);
}

fn last_updated_text(app: &App) -> String {
    match app.state.scoreboard.last_updated.as_deref() {
        Some(ts) => format!("Updated {ts} "),
        None => "Updated -- ".to_string(),
    }
}

fn draw_scoreboard(f: &mut Frame, area: Rect, app: &App) {
    let league = app.state.active_league;
    let block = default_border(Color::White).title(format!(" {} scoreboard ", league.label()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.state.scoreboard.phase {
        ScoreboardPhase::Loading => {
            draw_message(
                f,
                inner,
                &format!("Loading {} games...", league.label()),
                Color::DarkGray,
            );
        }
        ScoreboardPhase::Empty => {
            draw_message(
                f,
                inner,
                &format!("No {} games scheduled today.", league.label()),
                Color::DarkGray,
            );
        }
        ScoreboardPhase::Failed(message) => {
            draw_message(f, inner, message, Color::Red);
        }
        ScoreboardPhase::Ready => draw_card_grid(f, inner, app),
    }
}

fn draw_message(f: &mut Frame, area: Rect, text: &str, color: Color) {
    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        area,
    );
}

fn draw_card_grid(f: &mut Frame, area: Rect, app: &App) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let games = &app.state.scoreboard.games;
    let highlight = app.state.scoreboard.highlight_id.as_deref();

    let cols = usize::from((area.width / CARD_MIN_WIDTH).max(1));
    let col_width = area.width / cols as u16;

    let mut shown = 0usize;
    for (idx, game) in games.iter().enumerate() {
        let row = (idx / cols) as u16;
        let col = (idx % cols) as u16;
        let y = area.y + row * CARD_HEIGHT;
        if y + CARD_HEIGHT > area.y + area.height {
            break;
        }
        let card_area = Rect::new(area.x + col * col_width, y, col_width, CARD_HEIGHT);
        f.render_widget(
            GameCard {
                game,
                highlighted: highlight == Some(game.id.as_str()),
            },
            card_area,
        );
        shown += 1;
    }

    if shown < games.len() && area.height >= 1 {
        let footer = Rect::new(
            area.x,
            area.y + area.height.saturating_sub(1),
            area.width,
            1,
        );
        f.render_widget(
            Paragraph::new(format!("+{} more (enlarge terminal)", games.len() - shown))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right),
            footer,
        );
    }
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let [keys_area, updated_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(20)]).areas(area);

    f.render_widget(
        Paragraph::new("Keys: n=NBA  w=WNBA  r=refresh  f=fullscreen  q=quit")
            .style(Style::default().fg(Color::DarkGray)),
        keys_area,
    );
    f.render_widget(
        Paragraph::new(last_updated_text(app))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right),
        updated_area,
    );
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(2), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
