use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    match state.mode {
        Mode::AddWord => {
            let text = format!(" New word: {}\u{2588}", state.input_text);
            let prompt =
                Paragraph::new(text).style(Style::default().bg(Color::Blue).fg(Color::White));
            f.render_widget(prompt, area);
        }
        Mode::ConfirmDelete => {
            let word = state.delete_target.as_deref().unwrap_or("");
            let text = format!(" Delete \"{}\"? (y/n)", word);
            let prompt =
                Paragraph::new(text).style(Style::default().bg(Color::Red).fg(Color::White));
            f.render_widget(prompt, area);
        }
        _ => {
            let hints = match state.mode {
                Mode::Browse => format!(
                    " /: search  a: add  d: delete  t: theme({})  s: stats  j/k: navigate  Enter: open  ?: help  q: quit ",
                    state.theme
                ),
                Mode::Content => format!(
                    " Esc: back  /: search  j/k: scroll  d/u: half-page  gg/G: top/bottom  t: theme({})  q: quit ",
                    state.theme
                ),
                _ => unreachable!(),
            };

            let status =
                Paragraph::new(hints).style(Style::default().bg(Color::DarkGray).fg(Color::White));
            f.render_widget(status, area);
        }
    }
}
