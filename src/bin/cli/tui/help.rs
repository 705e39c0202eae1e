use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Static help text shown by the `?` overlay
const HELP_LINES: &[&str] = &[
    "",
    "  /          Search words (live filter)",
    "  j/k ↑/↓    Move selection",
    "  Enter/l    View the selected word",
    "  Tab        Switch between list and explanation",
    "  a          Add a new word",
    "  e          Edit hint for the selected word",
    "  d / Del    Delete the selected word (asks first)",
    "  t          Toggle light/dark theme",
    "  s          Show progress statistics",
    "  gg / G     Jump to top / bottom",
    "  ?  / F1    Toggle this help",
    "  q          Quit",
    "",
    "  Any key closes this window.",
];

pub fn draw(f: &mut Frame, area: Rect) {
    let width = 52.min(area.width.saturating_sub(4));
    let height = (HELP_LINES.len() as u16 + 2).min(area.height.saturating_sub(2));

    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
    let paragraph = Paragraph::new(lines).block(block);

    f.render_widget(paragraph, popup);
}
