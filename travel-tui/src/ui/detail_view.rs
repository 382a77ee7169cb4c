use super::*;
use crate::app::{Detail, DetailState};

pub fn render_detail_view(frame: &mut Frame, app: &App, body: Rect) {
    let title = match app.route.kind() {
        Some(kind) => format!(" {} ", capitalize(kind)),
        None => " Details ".to_string(),
    };

    let lines = match &app.detail {
        DetailState::Loading => vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        ))],
        DetailState::Failed(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ))],
        DetailState::Loaded(detail) => detail_lines(detail),
    };

    let card = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title)
            .padding(Padding::uniform(1)),
    );
    let area = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0)])
        .split(body)[0];
    frame.render_widget(card, area);
}

fn detail_lines(detail: &Detail) -> Vec<Line<'static>> {
    let name = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);

    match detail {
        Detail::Hotel(hotel) => vec![
            Line::from(Span::styled(hotel.hotel_name.clone(), name)),
            Line::from(format!("{}, {}", hotel.city, hotel.country)),
            Line::from(""),
            Line::from(Span::styled(format!("Chain: {}", hotel.chain_name), muted)),
        ],
        Detail::City(city) => vec![Line::from(Span::styled(city.name.clone(), name))],
        Detail::Country(country) => vec![
            Line::from(Span::styled(country.country.clone(), name)),
            Line::from(Span::styled(format!("ISO code: {}", country.iso_code), muted)),
        ],
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
