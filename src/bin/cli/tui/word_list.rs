use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &mut TuiState) {
    let is_active = state.mode == Mode::Browse;

    let title = if state.filter.is_empty() {
        " Words ".to_string()
    } else {
        format!(" Words /{} ", state.filter)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    // Keep the selection visible and the scroll offset in sync for
    // mouse hit-testing
    let visible = area.height.saturating_sub(2).max(1) as usize;
    if state.selected < state.list_scroll {
        state.list_scroll = state.selected;
    } else if state.selected >= state.list_scroll + visible {
        state.list_scroll = state.selected + 1 - visible;
    }

    let items: Vec<ListItem> = state
        .words
        .iter()
        .map(|word| ListItem::new(format!("\u{2022} {}", word)).style(Style::default().fg(Color::White)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(if is_active { Color::DarkGray } else { Color::Black })
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_offset(state.list_scroll);
    if !state.words.is_empty() {
        list_state.select(Some(state.selected));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}
