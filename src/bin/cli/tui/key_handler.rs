use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::app_state::{Mode, TuiState};

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    // Overlays swallow the next keypress
    if state.show_help {
        state.show_help = false;
        return;
    }
    if state.stats_lines.is_some() {
        state.stats_lines = None;
        return;
    }

    match state.mode {
        Mode::Browse => handle_browse_key(state, key),
        Mode::Content => handle_content_key(state, key),
        Mode::Search => handle_search_key(state, key),
        Mode::AddWord => handle_add_key(state, key),
        Mode::ConfirmDelete => handle_confirm_key(state, key),
    }
}

fn handle_browse_key(state: &mut TuiState, key: KeyEvent) {
    // Handle pending 'g' key
    if state.pending_key == Some('g') {
        state.pending_key = None;
        if key.code == KeyCode::Char('g') {
            state.go_top();
            return;
        }
        // Not 'gg', ignore
    }

    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Char('j') | KeyCode::Down => state.move_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_up(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => {
            state.view_selected();
        }
        KeyCode::Char('g') => {
            state.pending_key = Some('g');
        }
        KeyCode::Char('G') => state.go_bottom(),
        KeyCode::Char('/') => {
            state.mode = Mode::Search;
            state.search_input = state.filter.clone();
        }
        KeyCode::Tab => {
            if !state.rendered_lines.is_empty() {
                state.mode = Mode::Content;
            }
        }
        KeyCode::Char('a') | KeyCode::Char('n') => {
            state.mode = Mode::AddWord;
            state.input_text.clear();
        }
        KeyCode::Char('e') => {
            if let Some(word) = state.selected_word() {
                let hint = format!("Edit from a shell: glossa edit \"{}\" --text <markdown>", word);
                state.flash(hint);
            }
        }
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
            state.request_delete();
        }
        KeyCode::Char('t') => state.toggle_theme(),
        KeyCode::Char('s') => state.toggle_stats(),
        KeyCode::Char('?') | KeyCode::F(1) => {
            state.show_help = true;
        }
        _ => {}
    }
}

fn handle_content_key(state: &mut TuiState, key: KeyEvent) {
    // Handle pending 'g' key
    if state.pending_key == Some('g') {
        state.pending_key = None;
        if key.code == KeyCode::Char('g') {
            state.content_scroll = 0;
            return;
        }
    }

    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Esc | KeyCode::Tab | KeyCode::Char('h') | KeyCode::Left => {
            state.mode = Mode::Browse;
        }
        KeyCode::Char('j') | KeyCode::Down => state.content_scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => state.content_scroll_up(1),
        KeyCode::Char('d') => state.content_scroll_down(15),
        KeyCode::Char('u') => state.content_scroll_up(15),
        KeyCode::Char('g') => {
            state.pending_key = Some('g');
        }
        KeyCode::Char('G') => {
            state.content_scroll = state.rendered_lines.len().saturating_sub(1);
        }
        KeyCode::Char('/') => {
            state.mode = Mode::Search;
            state.search_input = state.filter.clone();
        }
        KeyCode::Char('t') => state.toggle_theme(),
        KeyCode::Char('?') | KeyCode::F(1) => {
            state.show_help = true;
        }
        _ => {}
    }
}

fn handle_search_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.clear_search();
            state.mode = Mode::Browse;
        }
        KeyCode::Enter => {
            // Keep the filter and go back to the narrowed list
            state.mode = Mode::Browse;
        }
        KeyCode::Backspace => {
            state.search_input.pop();
            state.apply_search();
        }
        KeyCode::Down => state.move_down(),
        KeyCode::Up => state.move_up(),
        KeyCode::Char(c) => {
            state.search_input.push(c);
            state.apply_search();
        }
        _ => {}
    }
}

fn handle_add_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.input_text.clear();
            state.mode = Mode::Browse;
        }
        KeyCode::Enter => {
            state.add_word_from_input();
        }
        KeyCode::Backspace => {
            state.input_text.pop();
        }
        KeyCode::Char(c) => {
            state.input_text.push(c);
        }
        _ => {}
    }
}

fn handle_confirm_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => state.confirm_delete(),
        _ => state.cancel_delete(),
    }
}

pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let col = mouse.column;
            let row = mouse.row;

            // Check if click is in the word list panel
            if let Some(ref area) = state.word_area {
                if col >= area.x
                    && col < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
                {
                    state.mode = Mode::Browse;

                    // Calculate which word was clicked (account for border)
                    let inner_row = row.saturating_sub(area.y + 1);
                    let clicked_idx = state.list_scroll + inner_row as usize;

                    if clicked_idx < state.words.len() {
                        if state.selected == clicked_idx {
                            // Click same word again: open it
                            state.view_selected();
                        } else {
                            state.selected = clicked_idx;
                        }
                    }
                    return;
                }
            }

            // Check if click is in the content panel
            if let Some(ref area) = state.content_area {
                if col >= area.x
                    && col < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
                    && !state.rendered_lines.is_empty()
                {
                    state.mode = Mode::Content;
                }
            }
        }
        MouseEventKind::ScrollDown => match state.mode {
            Mode::Browse => state.move_down(),
            Mode::Content => state.content_scroll_down(3),
            _ => {}
        },
        MouseEventKind::ScrollUp => match state.mode {
            Mode::Browse => state.move_up(),
            Mode::Content => state.content_scroll_up(3),
            _ => {}
        },
        _ => {}
    }
}
