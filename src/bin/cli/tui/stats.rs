use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn draw(f: &mut Frame, area: Rect, lines: &[String]) {
    let width = 40.min(area.width.saturating_sub(4));
    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));

    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Progress ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let text: Vec<Line> = lines
        .iter()
        .map(|l| Line::from(format!(" {}", l)))
        .collect();
    let paragraph = Paragraph::new(text).block(block);

    f.render_widget(paragraph, popup);
}
