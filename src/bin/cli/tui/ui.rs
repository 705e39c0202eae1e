use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;

use super::app_state::{Mode, TuiState};
use super::{content_widget, help, search_bar, stats, status_bar, word_list};

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();

    // Main layout: content area + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(size);

    let main_area = outer[0];
    let status_area = outer[1];

    // Horizontal split: word list (30%) | content (70%)
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_area);

    let word_area = panels[0];
    let content_area = panels[1];

    // Save areas for mouse hit-testing
    state.word_area = Some(word_area);
    state.content_area = Some(content_area);

    // Draw panels
    word_list::draw(f, word_area, state);
    content_widget::draw(f, content_area, state);

    // Draw status bar or search overlay
    if state.mode == Mode::Search {
        search_bar::draw(f, size, state);
    } else {
        status_bar::draw(f, status_area, state);
    }

    // Overlays
    if let Some(ref lines) = state.stats_lines {
        stats::draw(f, size, lines);
    }
    if state.show_help {
        help::draw(f, size);
    }
}
