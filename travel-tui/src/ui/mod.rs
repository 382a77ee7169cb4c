use crate::app::{App, Route};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

mod detail_view;
mod search_view;

const TITLE: &str = " Travel Search";

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    match app.route {
        Route::Home => search_view::render_search_view(frame, app, root[1]),
        Route::Hotel(_) | Route::Country(_) | Route::City(_) => {
            detail_view::render_detail_view(frame, app, root[1])
        }
    }

    render_controls(frame, root[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let title_width = 1 + TITLE.len() as u16 + 1;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(title_width), Constraint::Min(0)])
        .split(area);

    // Spins while a request is in flight, full symbol when idle
    let throbber_area = Rect {
        x: cols[0].x + 1,
        y: cols[0].y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: cols[0].y,
        width: cols[0].width.saturating_sub(2),
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading() {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(TITLE, Style::default().fg(Color::Yellow))),
        label_area,
    );

    let location = Line::from(vec![
        Span::styled(app.route.path(), Style::default().fg(Color::White)),
        Span::styled(
            format!("  {} ", app.api_url),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(location).alignment(Alignment::Right),
        cols[1],
    );
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Yellow);
    let mut spans = match app.route {
        Route::Home => {
            let mut spans = vec![
                Span::styled("Type", key),
                Span::raw(": Search  "),
                Span::styled("↑↓", key),
                Span::raw(": Navigate  "),
                Span::styled("Enter", key),
                Span::raw(": Open  "),
            ];
            if app.search.can_clear() {
                spans.push(Span::styled("Ctrl+X", key));
                spans.push(Span::raw(": Clear  "));
            }
            spans.push(Span::styled("Esc", key));
            spans.push(Span::raw(": Quit"));
            spans
        }
        Route::Hotel(_) | Route::Country(_) | Route::City(_) => vec![
            Span::styled("Esc/q", key),
            Span::raw(": Back  "),
            Span::styled("r", key),
            Span::raw(": Reload  "),
            Span::styled("Ctrl+C", key),
            Span::raw(": Quit"),
        ],
    };

    if let Some(message) = &app.status_message {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(message.clone(), Style::default().fg(Color::Red)));
    }

    let controls = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(controls, area);
}
