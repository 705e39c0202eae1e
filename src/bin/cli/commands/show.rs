use anyhow::Result;

use glossa::progress::Action;
use glossa::render::{render_document, Theme};

use crate::app::App;
use crate::render::terminal;

pub fn run(app: &App, word: &str, html: bool, theme: Theme, use_color: bool) -> Result<()> {
    let explanation = app.glossary.get(word).to_string();

    if html {
        println!("{}", render_document(&explanation, theme));
    } else if use_color {
        println!("{}{}{}", terminal::Color::BOLD, word, terminal::Color::RESET);
        println!();
        println!("{}", terminal::render_text(&explanation, true));
    } else {
        println!("{}", word);
        println!();
        println!("{}", terminal::render_text(&explanation, false));
    }

    // A missing word displays as blank rather than erroring, but only a
    // real entry counts as viewed.
    if app.glossary.contains(word) {
        app.record(Action::Viewed)?;
    } else {
        eprintln!("(no entry for '{}')", word);
    }

    Ok(())
}
