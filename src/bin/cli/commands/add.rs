use anyhow::{Context, Result};

use glossa::progress::Action;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &mut App, word: &str, text: Option<String>, format: &OutputFormat) -> Result<()> {
    let replacing = app.glossary.contains(word.trim());

    let key = app
        .glossary
        .add(word, text.unwrap_or_default())
        .context("Failed to add word")?;

    app.record(Action::Added)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "word": key,
                "replaced": replacing,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if replacing {
                println!("Replaced explanation for \"{}\"", key);
            } else {
                println!("Added \"{}\"", key);
            }
        }
    }

    Ok(())
}
