use super::*;
use crate::app::SearchPhase;

pub fn render_search_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Results dropdown
        ])
        .split(body);

    // Search input box
    let (before, after) = app.search_input.split_at_cursor();
    let search_text = format!("{}█{}", before, after);
    let mut search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Search hotels, cities or countries ")
        .padding(Padding::horizontal(1));
    if app.search.can_clear() {
        search_block = search_block.title_bottom(
            Line::from(Span::styled(" Ctrl+X: Clear ", Style::default().fg(Color::Yellow)))
                .right_aligned(),
        );
    }
    let search_box = Paragraph::new(search_text)
        .style(Style::default().fg(Color::White))
        .block(search_block);
    frame.render_widget(search_box, chunks[0]);

    if app.search.results().is_empty() {
        let hint = match app.search.phase() {
            SearchPhase::Pending => "Searching...",
            SearchPhase::Populated => "No matches",
            SearchPhase::Idle | SearchPhase::Cleared => "Start typing to search",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center),
            chunks[1],
        );
        return;
    }

    let results = app.search.results();
    let mut items: Vec<ListItem> = Vec::new();
    let mut index = 0;
    let groups = [
        ("Hotels", "hotels", results.hotels.len()),
        ("Countries", "countries", results.countries.len()),
        ("Cities", "cities", results.cities.len()),
    ];
    let entries = app.result_entries();
    for (heading, kind, count) in groups {
        items.push(ListItem::new(Span::styled(
            heading,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        if count == 0 {
            items.push(ListItem::new(Span::styled(
                format!("  No {} matched", kind),
                Style::default().fg(Color::DarkGray),
            )));
        }
        for entry in &entries[index..index + count] {
            let style = if index == app.selected_result {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            items.push(ListItem::new(format!("  {}", entry.label)).style(style));
            index += 1;
        }
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Results ({}) ", entries.len()))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, chunks[1]);
}
