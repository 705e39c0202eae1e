use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::{Mode, TuiState};
use glossa::render::Theme;

/// Terminal approximations of the two explanation palettes
struct ContentStyle {
    heading: Color,
    code: Color,
    quote: Color,
    bullet: Color,
}

fn content_style(theme: Theme) -> ContentStyle {
    match theme {
        Theme::Light => ContentStyle {
            heading: Color::Blue,
            code: Color::Red,
            quote: Color::Green,
            bullet: Color::White,
        },
        Theme::Dark => ContentStyle {
            heading: Color::LightBlue,
            code: Color::Yellow,
            quote: Color::LightGreen,
            bullet: Color::Gray,
        },
    }
}

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let is_active = state.mode == Mode::Content;

    let title = if state.content_word.is_empty() {
        " Explanation ".to_string()
    } else {
        format!(" {} ", state.content_word)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    if state.rendered_lines.is_empty() {
        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Select a word to view its explanation.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  Navigate with j/k, open with Enter, ? for help.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(help_text).block(block);
        f.render_widget(paragraph, area);
    } else {
        let style = content_style(state.theme);

        let text: Vec<Line> = state
            .rendered_lines
            .iter()
            .skip(state.content_scroll)
            .map(|line| {
                if line.starts_with('#') {
                    Line::from(Span::styled(
                        line.clone(),
                        Style::default().fg(style.heading).add_modifier(Modifier::BOLD),
                    ))
                } else if line.starts_with('>') {
                    Line::from(Span::styled(
                        line.clone(),
                        Style::default().fg(style.quote).add_modifier(Modifier::ITALIC),
                    ))
                } else if line.starts_with("```") {
                    Line::from(Span::styled(line.clone(), Style::default().fg(style.code)))
                } else if line.starts_with("\u{2022} ") {
                    Line::from(Span::styled(line.clone(), Style::default().fg(style.bullet)))
                } else {
                    Line::from(line.clone())
                }
            })
            .collect();

        let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    }
}
