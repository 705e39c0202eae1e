use anyhow::{Context, Result};

use crate::app::App;

pub fn run(app: &mut App, word: &str, text: Option<String>) -> Result<()> {
    let text = text.context(
        "No explanation given. Pass --text <markdown> or pipe the new text on stdin.",
    )?;

    app.glossary
        .update(word, text)
        .context(format!("Failed to edit '{}'", word))?;

    println!("Updated \"{}\"", word);
    Ok(())
}
