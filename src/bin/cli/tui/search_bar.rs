use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Search input line at the bottom; the word list itself narrows live
    let input_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let input_text = format!(
        "/{}   ({} matches)",
        state.search_input,
        state.words.len()
    );
    let input_widget = Paragraph::new(input_text).style(Style::default().fg(Color::Yellow));
    f.render_widget(input_widget, input_area);

    // Set cursor position
    let cursor_x = area.x + 1 + state.search_input.chars().count() as u16;
    let cursor_y = area.y + area.height.saturating_sub(1);
    f.set_cursor_position(Position::new(cursor_x, cursor_y));
}
